//! Lookback-specific configuration primitives and data transfer objects.
#![warn(missing_docs)]

mod config;
mod request;

pub use config::{AlignerConfig, EndpointConfig, LookbackConfig};
pub use request::CalculationRequest;
