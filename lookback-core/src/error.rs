use thiserror::Error;

/// Unified error type for the lookback workspace.
///
/// This covers transport failures, payload-shape violations, argument
/// validation errors, connector-tagged failures, and the busy rejection used
/// by the single-flight session guard. Alignment degradations (exit date
/// outside the data range, cross-table mismatches) are deliberately NOT
/// errors; they surface as [`crate::Diagnostic`] values instead.
#[derive(Debug, Error)]
pub enum LookbackError {
    /// The data endpoint was unreachable or answered with a non-2xx status.
    #[error("network failure: {0}")]
    Network(String),

    /// The endpoint body did not match the inbound contract (missing `data`,
    /// `data` not an array, required table absent, undecodable JSON).
    #[error("malformed payload: {reason}")]
    MalformedPayload {
        /// Human-readable description of the offending payload shape.
        reason: String,
    },

    /// Invalid input argument (bad dates, non-positive amount, empty fields).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "irr").
        capability: &'static str,
    },

    /// A calculation request is already in flight for this session.
    ///
    /// Re-submission while a request is outstanding is rejected, not queued.
    #[error("a calculation request is already in flight")]
    Busy,

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl LookbackError {
    /// Helper: build a `Network` error from any displayable cause.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Helper: build a `MalformedPayload` error describing the payload shape.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }
}
