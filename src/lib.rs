//! Gotify MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that forwards
//! notifications to a Gotify server. Clients get four tools - `send-message`,
//! `ask-for-help`, `notify-completion` and `summarize-activity` - each of
//! which validates its arguments, builds one Gotify payload and performs one
//! authenticated POST against `GOTIFY_URL`.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, the main server
//!   handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the notification tools exposed to MCP clients, defined as
//!     static table entries interpreted by one generic handler
//!   - **gotify**: the notification payload, credentials, and HTTP client
//!
//! # Configuration
//!
//! - `GOTIFY_URL` / `GOTIFY_TOKEN`: backend endpoint and application token,
//!   read per invocation; missing values fail the invocation, not the server
//! - `MCP_SERVER_NAME` / `MCP_LOG_LEVEL`: server identity and log filtering
//!
//! # Example
//!
//! ```rust,no_run
//! use gotify_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, McpServer};
