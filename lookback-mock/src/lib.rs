//! Mock connector for CI-safe examples and orchestration tests. Provides
//! deterministic data from static fixtures.
#![warn(missing_docs)]

use async_trait::async_trait;

use lookback_core::connector::{IndicesProvider, IrrProvider, LookbackConnector};
use lookback_core::{IndicesPayload, LookbackError};
use lookback_types::CalculationRequest;

mod fixtures;

pub use fixtures::indices::{SERIAL_YEARS, overview};
pub use fixtures::irr::calculation;

/// Mock connector serving the static fixtures.
///
/// Selecting the index `"FAIL"` in a calculation request forces a connector
/// failure so orchestration tests can exercise the failure path.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Construct the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(index: &str, capability: &'static str) -> Result<(), LookbackError> {
        if index == "FAIL" {
            return Err(LookbackError::connector(
                "lookback-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl LookbackConnector for MockConnector {
    fn name(&self) -> &'static str {
        "lookback-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_indices_provider(&self) -> Option<&dyn IndicesProvider> {
        Some(self as &dyn IndicesProvider)
    }

    fn as_irr_provider(&self) -> Option<&dyn IrrProvider> {
        Some(self as &dyn IrrProvider)
    }
}

#[async_trait]
impl IndicesProvider for MockConnector {
    async fn global_indices(&self) -> Result<IndicesPayload, LookbackError> {
        Ok(fixtures::indices::overview())
    }
}

#[async_trait]
impl IrrProvider for MockConnector {
    async fn calculate(&self, req: &CalculationRequest) -> Result<IndicesPayload, LookbackError> {
        Self::maybe_fail(&req.index, "irr")?;
        Ok(fixtures::irr::calculation(req))
    }
}
