//! Time-series utilities shared by connectors and the orchestrator.
//!
//! Modules include:
//! - `align`: locate the exit period and slice all series to a bounded,
//!   labeled window

/// Exit-index location and window construction.
pub mod align;
