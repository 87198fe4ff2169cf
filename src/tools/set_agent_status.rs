// ABOUTME: SetAgentStatusTool - explicitly set your informational status
// ABOUTME: (idle/working/waiting). The engine never infers it.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::agent::AgentStatus;
use crate::coordinator::Coordinator;
use crate::tool::{Tool, ToolResult};

/// Tool for setting an agent's advertised status.
pub struct SetAgentStatusTool {
    coordinator: Arc<Coordinator>,
}

impl SetAgentStatusTool {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for SetAgentStatusTool {
    fn name(&self) -> &str {
        "set_agent_status"
    }

    fn description(&self) -> &str {
        "Advertise your current status (idle, working, waiting) to other agents. \
         Informational only; requires at least one active claim."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "agent": {
                    "type": "string",
                    "description": "Your agent identifier"
                },
                "status": {
                    "type": "string",
                    "enum": ["idle", "working", "waiting"]
                }
            },
            "required": ["agent", "status"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            agent: String,
            status: AgentStatus,
        }
        let params: Params = serde_json::from_value(params)?;

        match self
            .coordinator
            .lifecycle()
            .set_status(&params.agent, params.status)
            .await
        {
            Ok(agent) => Ok(ToolResult::json(serde_json::json!({
                "status": "ok",
                "agent": agent,
            }))),
            Err(err) => super::coord_error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimMode;
    use crate::graph::{Node, NodeKind};
    use crate::store::{GraphStore, MemoryStore};

    #[tokio::test]
    async fn test_status_round_trips_through_active_agents() {
        let store = Arc::new(MemoryStore::new());
        store
            .upsert_node(Node::new(
                "src/app.py",
                NodeKind::File {
                    extension: "py".to_string(),
                    size_bytes: 0,
                },
            ))
            .await
            .unwrap();
        let coordinator = Arc::new(Coordinator::new(store));
        coordinator
            .claims()
            .claim_node("claude", "src/app.py", ClaimMode::Exclusive, "work")
            .await
            .unwrap();

        let tool = SetAgentStatusTool::new(coordinator.clone());
        let result = tool
            .execute(serde_json::json!({ "agent": "claude", "status": "waiting" }))
            .await
            .unwrap();
        assert_eq!(result.status(), Some("ok"));

        let agents = coordinator.claims().get_active_agents().await.unwrap();
        assert_eq!(agents[0].status, AgentStatus::Waiting);
    }

    #[tokio::test]
    async fn test_absent_agent_is_not_found() {
        let tool = SetAgentStatusTool::new(Arc::new(Coordinator::in_memory()));
        let result = tool
            .execute(serde_json::json!({ "agent": "ghost", "status": "idle" }))
            .await
            .unwrap();
        assert!(result.is_error);
        assert_eq!(result.status(), Some("not_found"));
    }
}
