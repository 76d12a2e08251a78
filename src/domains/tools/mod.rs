//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool turns its arguments into one Gotify notification and reports
//! the delivery outcome to the client.
//!
//! ## Architecture
//!
//! - `definitions/` - Static tool definitions (one file per tool)
//! - `arguments.rs` - Typed extraction from the JSON argument bag
//! - `handlers.rs` - The generic execution pipeline shared by all tools
//! - `router.rs` - ToolRouter builder over the definition table
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a `ToolDefinition` static
//! 2. Export it in `definitions/mod.rs` and list it in `definitions::all()`
//!
//! **No need to modify `handlers.rs` or `router.rs`!** Routes are built from
//! the table.

pub mod arguments;
pub mod definitions;
mod error;
mod handlers;
pub mod router;

pub use error::ToolError;
pub use handlers::{create_route, execute};
pub use router::build_tool_router;
