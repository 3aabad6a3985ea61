use async_trait::async_trait;

use lookback_core::LookbackError;
use url::Url;

/// Transport abstraction (so we can inject mocks in tests).
///
/// The worker endpoint is query-parameter driven and always answers with a
/// JSON body, so the transport surface is a single GET returning text; body
/// decoding stays with the connector.
#[async_trait]
pub trait WorkerTransport: Send + Sync {
    /// Perform a GET and return the response body on a 2xx status.
    ///
    /// # Errors
    /// Returns `LookbackError::Network` when the endpoint is unreachable or
    /// answers with a non-2xx status.
    async fn get(&self, url: Url) -> Result<String, LookbackError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl WorkerTransport for HttpTransport {
    async fn get(&self, url: Url) -> Result<String, LookbackError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LookbackError::network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = %status, "endpoint answered non-2xx");
            return Err(LookbackError::network(format!(
                "endpoint answered {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| LookbackError::network(format!("reading body from {url} failed: {e}")))
    }
}
