//! The shared error taxonomy for connector calls.
//!
//! Connectors map transport and shape failures into [`ConnectorError`]; the
//! orchestrator absorbs every variant into the operation's Failed state and
//! classifies it with [`FailureKind`]. Raw transport detail is logged, never
//! displayed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which class of absorbed failure produced a Failed record.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Parameters failed a presence check. The call never reached the network.
    Validation,
    /// Network/connectivity failure, timeout, or non-success HTTP status.
    Transport,
    /// Response received but not well-formed for the operation.
    Protocol,
}

/// Errors from connector calls.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Network-level error (connection reset, DNS failure, etc.).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The HTTP client gave up waiting for the collaborator.
    #[error("request timed out")]
    Timeout,

    /// The collaborator answered with a non-success status code.
    #[error("HTTP {code}: {body}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The response body, included for logging.
        body: String,
    },

    /// Response received but not well-formed for the operation.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ConnectorError {
    /// Build a `Status` error from a reqwest status code and body text.
    pub fn status(code: reqwest::StatusCode, body: &str) -> Self {
        ConnectorError::Status {
            code: code.as_u16(),
            body: body.to_string(),
        }
    }

    /// Classify this error into the orchestrator's failure taxonomy.
    pub fn kind(&self) -> FailureKind {
        match self {
            ConnectorError::Network(_) | ConnectorError::Timeout | ConnectorError::Status { .. } => {
                FailureKind::Transport
            }
            ConnectorError::Malformed(_) => FailureKind::Protocol,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ConnectorError::Timeout
        } else {
            ConnectorError::Network(Box::new(err))
        }
    }
}
