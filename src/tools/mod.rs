// ABOUTME: Built-in tools - one per external coordination operation.
// ABOUTME: Each wraps the engine and speaks the JSON request/response shape.

mod claim_node;
mod clear_messages;
mod get_active_agents;
mod get_messages;
mod query_codebase;
mod release_node;
mod send_message;
mod set_agent_status;
mod update_graph;

pub use claim_node::*;
pub use clear_messages::*;
pub use get_active_agents::*;
pub use get_messages::*;
pub use query_codebase::*;
pub use release_node::*;
pub use send_message::*;
pub use set_agent_status::*;
pub use update_graph::*;

use std::sync::Arc;

use crate::coordinator::Coordinator;
use crate::error::CoordError;
use crate::tool::{Registry, ToolResult};

/// Register the full coordination tool surface on a registry.
pub async fn register_all(registry: &Registry, coordinator: Arc<Coordinator>) {
    registry.register(ClaimNodeTool::new(coordinator.clone())).await;
    registry.register(ReleaseNodeTool::new(coordinator.clone())).await;
    registry.register(UpdateGraphTool::new(coordinator.clone())).await;
    registry
        .register(GetActiveAgentsTool::new(coordinator.clone()))
        .await;
    registry
        .register(QueryCodebaseTool::new(coordinator.clone()))
        .await;
    registry.register(SendMessageTool::new(coordinator.clone())).await;
    registry.register(GetMessagesTool::new(coordinator.clone())).await;
    registry
        .register(ClearMessagesTool::new(coordinator.clone()))
        .await;
    registry.register(SetAgentStatusTool::new(coordinator)).await;
}

/// Map engine errors to tool results: expected, negotiable failures
/// become structured responses; store failures propagate verbatim.
fn coord_error(err: CoordError) -> Result<ToolResult, anyhow::Error> {
    match err {
        CoordError::InvalidArgument(msg) => Ok(ToolResult::error("invalid", msg)),
        CoordError::NotFound(msg) => Ok(ToolResult::error("not_found", msg)),
        CoordError::Store(err) => Err(err.into()),
    }
}
