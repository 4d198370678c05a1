//! Error types and handling for the MCP server.
//!
//! Startup-level failures: configuration, the API client and transports.
//! Tool failures never reach this type; they become error results.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the Webmaster API client.
    #[error("Webmaster API error: {0}")]
    Api(#[from] crate::domains::webmaster::ApiError),

    /// Error raised by a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::webmaster::ApiError;

    #[test]
    fn test_config_error_message() {
        let err = Error::config("MCP_WEBMASTER_TOKEN is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: MCP_WEBMASTER_TOKEN is not set"
        );
    }

    #[test]
    fn test_from_api_error() {
        let err: Error = ApiError::missing("hostId").into();
        assert!(matches!(err, Error::Api(_)));
        assert!(err.to_string().contains("hostId"));
    }
}
