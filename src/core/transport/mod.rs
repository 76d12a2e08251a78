//! Transport layer for the MCP server.
//!
//! STDIO is the transport for this server: the MCP client owns the process
//! and speaks JSON-RPC over stdin/stdout. The transport handles the
//! connection lifecycle and delegates message processing to the server
//! handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
