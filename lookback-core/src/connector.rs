use async_trait::async_trait;

use crate::LookbackError;
use crate::types::IndicesPayload;
use lookback_types::CalculationRequest;

/// Focused role trait for connectors that serve the overview payload.
#[async_trait]
pub trait IndicesProvider: Send + Sync {
    /// Fetch the full global-indices payload (both tables, all series).
    async fn global_indices(&self) -> Result<IndicesPayload, LookbackError>;
}

/// Focused role trait for connectors that run an IRR calculation.
#[async_trait]
pub trait IrrProvider: Send + Sync {
    /// Fetch the calculation payload for the given request: both tables
    /// windowed server-side plus the IRR summary fields.
    async fn calculate(&self, req: &CalculationRequest) -> Result<IndicesPayload, LookbackError>;
}

/// Main connector trait implemented by provider crates. Exposes capability
/// discovery.
pub trait LookbackConnector: Send + Sync {
    /// A stable identifier for logs and error tagging (e.g. "lookback-worker").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise the overview capability by returning a usable trait object
    /// reference when supported.
    fn as_indices_provider(&self) -> Option<&dyn IndicesProvider> {
        None
    }

    /// Advertise the calculation capability by returning a usable trait
    /// object reference when supported.
    fn as_irr_provider(&self) -> Option<&dyn IrrProvider> {
        None
    }
}
