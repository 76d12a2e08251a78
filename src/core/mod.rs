//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, server lifecycle management, and the stdio transport.

pub mod config;
pub mod server;
pub mod transport;

pub use config::Config;
pub use server::McpServer;
pub use transport::{StdioTransport, TransportError, TransportResult};
