//! Generic execution pipeline for the notification tools.
//!
//! Every tool shares the same linear pass: extract arguments, build the
//! payload, deliver it to Gotify, and report the outcome. The per-tool
//! differences live entirely in the [`ToolDefinition`] table, so a single
//! handler serves all routes.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, JsonObject},
};
use tracing::{info, instrument, warn};

use super::definitions::ToolDefinition;
use crate::domains::gotify::GotifyClient;

/// Execute one tool invocation against its definition.
///
/// The required argument is validated before anything else; a missing
/// argument or missing credentials never produces an outbound call. Dispatch
/// failures come back as error results with the tool's failure prefix, never
/// as protocol-level errors.
#[instrument(skip_all, fields(tool = %def.name))]
pub fn execute(def: &ToolDefinition, args: &JsonObject) -> CallToolResult {
    info!("Tool '{}' called", def.name);

    let payload = match def.payload(args) {
        Ok(payload) => payload,
        Err(e) => return failure(e.to_string()),
    };

    let delivery = GotifyClient::from_env().and_then(|client| client.push(&payload));
    match delivery {
        Ok(()) => {
            info!("{}", def.success_text);
            success(def.success_text)
        }
        Err(e) => failure(format!("{}: {}", def.failure_prefix, e)),
    }
}

/// Create a ToolRoute for the given definition.
pub fn create_route<S>(def: &'static ToolDefinition) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(def.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            // reqwest::blocking drives its own runtime, so the delivery runs
            // on a separate OS thread instead of the async executor.
            let handle = std::thread::spawn(move || execute(def, &args));

            handle
                .join()
                .map_err(|_| McpError::internal_error("Thread panicked".to_string(), None))
        }
        .boxed()
    })
}

fn success(text: &str) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.to_string())])
}

fn failure(message: String) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

// ============================================================================
// Tests
// ============================================================================
