//! Errors raised by the Webmaster API client.

use thiserror::Error;

/// A specialized Result type for Webmaster API calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Statuses the upstream uses for transient failures.
const RETRYABLE_STATUSES: [u16; 3] = [500, 502, 503];

/// Errors that can occur while calling the Webmaster API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required parameter was missing or blank. Raised before any I/O.
    #[error("Missing required parameter: {0}")]
    Validation(String),

    /// The attempt did not complete within the configured timeout.
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// The request could not be sent or its body could not be read.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The upstream answered with a body that is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request could not be built (bad base URL, unencodable query).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Create a validation error naming the missing field.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Validation(field.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// HTTP status carried by an upstream failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether another attempt may succeed.
    ///
    /// Only timeouts and 500/502/503 upstream responses qualify. Validation,
    /// client-side statuses and parse failures are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::Upstream { status, .. } => RETRYABLE_STATUSES.contains(status),
            _ => false,
        }
    }
}
