//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file) or defaults.

use super::transport::TransportConfig;
use crate::domains::webmaster::{ClientOptions, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Webmaster API credentials and client settings.
    pub webmaster: WebmasterConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Webmaster API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct WebmasterConfig {
    /// OAuth token sent as `Authorization: OAuth <token>`.
    /// Required at startup; see `WebmasterClient::from_config`.
    #[serde(skip_serializing, default)]
    pub token: Option<String>,

    /// API root, without a trailing resource path.
    pub base_url: String,

    /// Timeout and retry policy.
    pub options: ClientOptions,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for WebmasterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebmasterConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("options", &self.options)
            .finish()
    }
}

impl Default for WebmasterConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            options: ClientOptions::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "webmaster-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            webmaster: WebmasterConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_WEBMASTER_TOKEN`.
    /// A missing token is not an error here; building the client rejects it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.webmaster.token = std::env::var("MCP_WEBMASTER_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        if let Ok(base_url) = std::env::var("MCP_WEBMASTER_BASE_URL") {
            info!("Webmaster API base URL overridden: {}", base_url);
            config.webmaster.base_url = base_url;
        }

        let options = &mut config.webmaster.options;
        options.timeout_ms = env_or("MCP_WEBMASTER_TIMEOUT_MS", options.timeout_ms);
        options.max_attempts = env_or("MCP_WEBMASTER_MAX_ATTEMPTS", options.max_attempts);
        options.retry_delay_ms = env_or("MCP_WEBMASTER_RETRY_DELAY_MS", options.retry_delay_ms);

        config
    }
}

/// Parse an optional numeric variable, keeping `default` when unset or invalid.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "MCP_WEBMASTER_TOKEN",
        "MCP_WEBMASTER_BASE_URL",
        "MCP_WEBMASTER_TIMEOUT_MS",
        "MCP_WEBMASTER_MAX_ATTEMPTS",
        "MCP_WEBMASTER_RETRY_DELAY_MS",
    ];

    fn clear_vars() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_token_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("MCP_WEBMASTER_TOKEN", "test_token_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.webmaster.token.as_deref(), Some("test_token_12345"));
        clear_vars();
    }

    #[test]
    fn test_blank_token_is_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("MCP_WEBMASTER_TOKEN", "   ");
        }
        let config = Config::from_env();
        assert!(config.webmaster.token.is_none());
        clear_vars();
    }

    #[test]
    fn test_client_options_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("MCP_WEBMASTER_TIMEOUT_MS", "5000");
            std::env::set_var("MCP_WEBMASTER_MAX_ATTEMPTS", "5");
            std::env::set_var("MCP_WEBMASTER_RETRY_DELAY_MS", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.webmaster.options.timeout_ms, 5000);
        assert_eq!(config.webmaster.options.max_attempts, 5);
        assert_eq!(config.webmaster.options.retry_delay_ms, 1000);
        clear_vars();
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let webmaster = WebmasterConfig {
            token: Some("super_secret_token".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", webmaster);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.webmaster.token.is_none());
        assert_eq!(config.webmaster.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.webmaster.options, ClientOptions::default());
    }
}
