//! MCP Server Entry Point
//!
//! This is the main entry point for the Gotify MCP server. It initializes
//! logging, loads configuration, and serves the MCP protocol over stdio.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use gotify_mcp_server::core::{Config, McpServer, StdioTransport};
use gotify_mcp_server::domains::gotify::GotifyCredentials;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Credentials are re-read per invocation; at startup we only warn so a
    // misconfigured environment still gets a running server.
    if let Err(e) = GotifyCredentials::from_env() {
        warn!("Gotify is not configured: {}", e);
    }

    // Create the MCP server
    let server = McpServer::new(config);

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level, writing to stderr so
/// stdout stays reserved for MCP protocol frames.
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
