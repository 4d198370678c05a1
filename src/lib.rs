//! Yandex Webmaster MCP Server Library
//!
//! This crate exposes the Yandex Webmaster API v4 to MCP clients as a set of
//! tools: hosts and verification, search queries, sitemaps, indexing,
//! diagnostics, links and recrawl.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **webmaster**: HTTP client with timeouts, retries and typed parameters
//!   - **tools**: Tool tables, argument validation and the error boundary
//!
//! # Example
//!
//! ```rust,no_run
//! use webmaster_mcp_server::core::{Config, McpServer, TransportService};
//! use webmaster_mcp_server::domains::webmaster::WebmasterClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let client = WebmasterClient::from_config(&config.webmaster)?;
//!     let server = McpServer::new(config.clone(), client);
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::webmaster::WebmasterClient;
