// ABOUTME: GetActiveAgentsTool - see who is working where before you
// ABOUTME: start, with every claim each agent holds.

use std::sync::Arc;

use async_trait::async_trait;

use crate::coordinator::Coordinator;
use crate::tool::{Tool, ToolResult};

/// Tool for listing active agents and their claims.
pub struct GetActiveAgentsTool {
    coordinator: Arc<Coordinator>,
}

impl GetActiveAgentsTool {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for GetActiveAgentsTool {
    fn name(&self) -> &str {
        "get_active_agents"
    }

    fn description(&self) -> &str {
        "Query which agents are currently working on which nodes. Use this to check for \
         potential conflicts before starting work."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        match self.coordinator.claims().get_active_agents().await {
            Ok(agents) => Ok(ToolResult::json(serde_json::json!({
                "status": "ok",
                "agent_count": agents.len(),
                "agents": agents,
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
    async fn test_reports_agents_with_claims() {
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
            .claim_node("claude", "src/app.py", ClaimMode::Exclusive, "refactor")
            .await
            .unwrap();

        let tool = GetActiveAgentsTool::new(coordinator);
        let result = tool.execute(serde_json::json!({})).await.unwrap();
        assert_eq!(result.status(), Some("ok"));
        assert_eq!(result.content["agent_count"], 1);
        assert_eq!(result.content["agents"][0]["agent"], "claude");
        assert_eq!(result.content["agents"][0]["status"], "working");
        assert_eq!(
            result.content["agents"][0]["claims"][0]["node_path"],
            "src/app.py"
        );
    }

    #[tokio::test]
    async fn test_empty_when_no_claims() {
        let tool = GetActiveAgentsTool::new(Arc::new(Coordinator::in_memory()));
        let result = tool.execute(serde_json::json!({})).await.unwrap();
        assert_eq!(result.content["agent_count"], 0);
    }
}
