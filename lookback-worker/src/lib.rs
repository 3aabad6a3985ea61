//! lookback-worker
//!
//! Public connector that implements `LookbackConnector` on top of the hosted
//! IRR worker HTTP endpoint. The endpoint is a single URL driven entirely by
//! query parameters: `type=global-indices` selects the overview payload,
//! while `start_date`/`end_date`/`amount`/`index` run a calculation.
#![warn(missing_docs)]

/// Transport definitions and the production `reqwest`-backed transport.
pub mod adapter;

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use adapter::{HttpTransport, WorkerTransport};
use lookback_core::connector::{IndicesProvider, IrrProvider, LookbackConnector};
use lookback_core::{IndicesPayload, LookbackError, decode_payload_str};
use lookback_types::{CalculationRequest, EndpointConfig};

/// Public connector type for the hosted worker endpoint.
pub struct WorkerConnector {
    transport: Arc<dyn WorkerTransport>,
    base_url: Url,
}

impl std::fmt::Debug for WorkerConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerConnector")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WorkerConnector {
    /// Stable connector name used in logs and error tags.
    pub const NAME: &'static str = "lookback-worker";

    /// Build against the default endpoint with a fresh HTTP client.
    ///
    /// # Errors
    /// Returns `LookbackError::InvalidArg` if the configured base URL does
    /// not parse.
    pub fn new_default() -> Result<Self, LookbackError> {
        Self::from_config(&EndpointConfig::default())
    }

    /// Build against a configured endpoint with a fresh HTTP client.
    ///
    /// # Errors
    /// Returns `LookbackError::InvalidArg` if the configured base URL does
    /// not parse.
    pub fn from_config(config: &EndpointConfig) -> Result<Self, LookbackError> {
        Self::with_transport(config, Arc::new(HttpTransport::default()))
    }

    /// Build from a provided `reqwest::Client`, e.g. to share connection
    /// pools or set timeouts.
    ///
    /// # Errors
    /// Returns `LookbackError::InvalidArg` if the configured base URL does
    /// not parse.
    pub fn with_client(
        config: &EndpointConfig,
        client: reqwest::Client,
    ) -> Result<Self, LookbackError> {
        Self::with_transport(config, Arc::new(HttpTransport::new(client)))
    }

    /// Build from any transport (used by tests to inject mocks).
    ///
    /// # Errors
    /// Returns `LookbackError::InvalidArg` if the configured base URL does
    /// not parse.
    pub fn with_transport(
        config: &EndpointConfig,
        transport: Arc<dyn WorkerTransport>,
    ) -> Result<Self, LookbackError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            LookbackError::invalid_arg(format!("bad endpoint url {:?}: {e}", config.base_url))
        })?;
        Ok(Self {
            transport,
            base_url,
        })
    }

    fn url_with_query<'a>(&self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().clear().extend_pairs(pairs);
        url
    }

    async fn fetch_payload(&self, url: Url) -> Result<IndicesPayload, LookbackError> {
        let body = self.transport.get(url).await.map_err(Self::tag_error)?;
        decode_payload_str(&body)
    }

    fn tag_error(e: LookbackError) -> LookbackError {
        match e {
            LookbackError::Other(msg) => LookbackError::connector(Self::NAME, msg),
            other => other,
        }
    }
}

impl LookbackConnector for WorkerConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "IRR Worker"
    }

    fn as_indices_provider(&self) -> Option<&dyn IndicesProvider> {
        Some(self as &dyn IndicesProvider)
    }

    fn as_irr_provider(&self) -> Option<&dyn IrrProvider> {
        Some(self as &dyn IrrProvider)
    }
}

#[async_trait]
impl IndicesProvider for WorkerConnector {
    async fn global_indices(&self) -> Result<IndicesPayload, LookbackError> {
        let url = self.url_with_query([("type", "global-indices")]);
        tracing::debug!(%url, "fetching overview payload");
        self.fetch_payload(url).await
    }
}

#[async_trait]
impl IrrProvider for WorkerConnector {
    async fn calculate(&self, req: &CalculationRequest) -> Result<IndicesPayload, LookbackError> {
        let url = self.url_with_query([
            ("start_date", req.start_date.as_str()),
            ("end_date", req.end_date.as_str()),
            ("amount", req.amount.as_str()),
            ("index", req.index.as_str()),
        ]);
        tracing::debug!(%url, "fetching calculation payload");
        self.fetch_payload(url).await
    }
}
