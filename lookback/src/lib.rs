//! Lookback orchestrates index-comparison and IRR lookback requests against
//! a single external data endpoint.
//!
//! Overview
//! - Validates user inputs before any fetch (dates, bounds, amount).
//! - Fetches typed payloads through a `lookback_core` connector.
//! - Aligns both payload tables to the user-chosen exit date and hands the
//!   rendering collaborator a pure display model.
//! - Drives the per-request lifecycle `Idle → Loading → {Success | Failure}
//!   → Idle` with a single-flight guard and exactly-once failure reporting.
//!
//! Key behaviors and trade-offs
//! - Alignment fails open: an exit date outside the data range or a ragged
//!   series degrades to diagnostics and keeps rendering, it never errors.
//! - Missing values stay contextually distinct: chart data preserves gaps,
//!   monetary values zero-fill.
//! - A new calculation fully replaces the previous one; the old chart is
//!   destroyed before the new render, so no dangling visual state survives.
//!
//! Examples
//! Building an orchestrator and running the overview:
//! ```rust,ignore
//! use std::sync::Arc;
//! use lookback::Lookback;
//! use lookback_worker::WorkerConnector;
//!
//! let connector = Arc::new(WorkerConnector::new_default()?);
//! let lookback = Lookback::builder().with_connector(connector).build()?;
//! let view = lookback.overview().await?;
//! renderer.render(&view.model);
//! ```
//!
//! Running a calculation session:
//! ```rust,ignore
//! use lookback_types::CalculationRequest;
//!
//! let session = lookback.session(renderer, notifier);
//! let req = CalculationRequest::new("01/01/2016", "12/31/2024", "100000", "NSE:NIFTY");
//! let outcome = session.submit(&req).await?;
//! println!("IRR: {:.2}%", outcome.summary.calculated_irr);
//! session.dispose();
//! ```
//!
//! See `lookback/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod session;
mod validate;

pub use crate::core::{Lookback, LookbackBuilder, OverviewView};
pub use session::{
    CalculationOutcome, CalculationSession, ChartRenderer, FailureNotifier, SessionState,
};
pub use validate::{ValidatedRequest, validate_request};

// Re-export core types for convenience
pub use lookback_core::{
    AlignedActual,
    AlignedSeries,
    // Derived window and render types
    AlignedWindow,
    CalendarDate,
    Diagnostic,
    DisplaySelection,
    // Payload types
    HistoricalPoint,
    IndicesPayload,
    IrrSummary,
    // Foundational types
    LookbackConnector,
    LookbackError,
    RawDate,
    RawValue,
    RenderModel,
    RenderSeries,
    SeriesEntry,
    TableKind,
};
pub use lookback_types::{AlignerConfig, CalculationRequest, EndpointConfig, LookbackConfig};
