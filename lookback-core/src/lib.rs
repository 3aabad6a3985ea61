//! lookback-core
//!
//! Core types, traits, and the series-alignment engine shared across the
//! lookback ecosystem.
//!
//! - `types`: endpoint payload structures and the derived window/render types.
//! - `date`: normalization of the two raw date encodings the endpoint mixes.
//! - `payload`: body decoding, shape validation, cross-table reconciliation.
//! - `timeseries`: exit-index location and window construction.
//! - `selection`: display-selection resolution and ticker-prefix mapping.
//! - `render`: pure display-model computation for the chart collaborator.
//! - `connector`: the `LookbackConnector` trait and capability role traits.
//!
//! The alignment engine is synchronous and pure; the connector seam assumes
//! the Tokio ecosystem as the async runtime, as everywhere else in this
//! workspace.
#![warn(missing_docs)]

/// Connector capability traits and the primary `LookbackConnector` interface.
pub mod connector;
/// Date normalization for serial and textual encodings.
pub mod date;
mod error;
/// Payload decoding, validation, and reconciliation diagnostics.
pub mod payload;
/// Pure display-model computation.
pub mod render;
/// Display-selection resolution.
pub mod selection;
/// Time-series utilities for exit location and window slicing.
pub mod timeseries;
pub mod types;

pub use connector::LookbackConnector;
pub use date::{CalendarDate, normalize_date, parse_mdy, serial_epoch};
pub use error::LookbackError;
pub use payload::{decode_payload, decode_payload_str, reconcile_tables, require_base_table};
pub use render::{compute_display_model, exit_value};
pub use selection::{DisplaySelection, companion_index_name, resolve_display_selection};
pub use timeseries::align::{ExitLocation, actual_values, build_window, locate_exit_index};
pub use types::*;
