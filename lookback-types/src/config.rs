//! Configuration types shared by the orchestrator and connectors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Location of the external data endpoint serving indices and calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the worker endpoint, without query parameters.
    pub base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "https://irr-worker.irr-calculation.workers.dev".to_string(),
        }
    }
}

/// Tuning for the series aligner and its caller-side validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignerConfig {
    /// Comparison indices shown even when the user selects a different one.
    ///
    /// The user-selected series is always unioned into this set per request;
    /// the set itself is never mutated.
    pub default_series: Vec<String>,
    /// Earliest supported start date for a calculation request.
    ///
    /// A configurable lower bound, not a hardcoded law: deployments with
    /// longer backing data may move it.
    pub min_start_date: NaiveDate,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            default_series: vec![
                "NASDAQ 100".to_string(),
                "NIFTY IT".to_string(),
                "BSE IT".to_string(),
                "NIFTY".to_string(),
            ],
            // Observed default deployment boundary.
            min_start_date: NaiveDate::from_ymd_opt(2014, 1, 1).expect("valid date literal"),
        }
    }
}

/// Global configuration for the `Lookback` orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackConfig {
    /// Endpoint location used by production connectors.
    pub endpoint: EndpointConfig,
    /// Aligner defaults and validation bounds.
    pub aligner: AlignerConfig,
}
