//! Tool Router - builds the rmcp ToolRouter from the definition table.
//!
//! Each definition in `definitions::all()` becomes one route backed by the
//! shared generic handler, so the router and the advertised tool list can
//! never drift apart.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions;
use super::handlers;

/// Build the tool router with one route per tool definition.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();
    for def in definitions::all() {
        router = router.with_route(handlers::create_route(def));
    }
    router
}
