//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. All tool routing is delegated to the tools domain: the router is
//! built from the static definition table in `domains/tools/definitions/`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};

use super::config::Config;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and exposes the
/// notification tools through the tool router.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Config,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server forwards notifications to a Gotify instance. Configure \
                 GOTIFY_URL and GOTIFY_TOKEN, then use send-message to push a \
                 notification, ask-for-help to request assistance, notify-completion \
                 to report a finished task, and summarize-activity to share a status \
                 digest."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
