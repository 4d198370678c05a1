//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, builds the Webmaster client and
//! starts the server with the configured transport. A missing OAuth token is
//! fatal.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use webmaster_mcp_server::core::{Config, McpServer, TransportService};
use webmaster_mcp_server::domains::webmaster::WebmasterClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let client = match WebmasterClient::from_config(&config.webmaster) {
        Ok(client) => client,
        Err(e) => {
            error!("Cannot start: {}", e);
            return Err(e.into());
        }
    };
    info!(
        "Webmaster client ready ({}, {} attempts, {}ms timeout)",
        client.base_url(),
        client.options().max_attempts,
        client.options().timeout_ms
    );

    let server = McpServer::new(config.clone(), client);

    let transport = TransportService::new(config.transport);
    if let Err(e) = transport.run(server).await {
        error!("Transport failed: {}", e);
        return Err(e.into());
    }

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the stdio transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
