// ABOUTME: ReleaseNodeTool - release a claimed node when done, tearing
// ABOUTME: down its auto-claim batch and signalling reindex.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::coordinator::Coordinator;
use crate::tool::{Tool, ToolResult};

/// Tool for releasing a previously claimed node.
pub struct ReleaseNodeTool {
    coordinator: Arc<Coordinator>,
}

impl ReleaseNodeTool {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for ReleaseNodeTool {
    fn name(&self) -> &str {
        "release_node"
    }

    fn description(&self) -> &str {
        "Release a node you previously claimed. Call this when you are done working on it. \
         Releasing an exclusive claim also releases the shared claims it auto-created on \
         dependents, unless another of your exclusive claims still covers them."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "agent": {
                    "type": "string",
                    "description": "Your agent identifier"
                },
                "node_path": {
                    "type": "string",
                    "description": "Repo-relative path of the node to release"
                }
            },
            "required": ["agent", "node_path"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            agent: String,
            node_path: String,
        }
        let params: Params = serde_json::from_value(params)?;

        match self
            .coordinator
            .claims()
            .release_node(&params.agent, &params.node_path)
            .await
        {
            Ok(outcome) => Ok(ToolResult::json(serde_json::json!({
                "status": "ok",
                "released": outcome.released,
                "reindex_triggered": outcome.reindex_triggered,
            }))),
            Err(err) => super::coord_error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, NodeKind};
    use crate::store::{GraphStore, MemoryStore};

    async fn fixture() -> (ReleaseNodeTool, Arc<Coordinator>) {
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
        (ReleaseNodeTool::new(coordinator.clone()), coordinator)
    }

    #[tokio::test]
    async fn test_release_after_claim() {
        let (tool, coordinator) = fixture().await;
        coordinator
            .claims()
            .claim_node("claude", "src/app.py", crate::claim::ClaimMode::Exclusive, "work")
            .await
            .unwrap();

        let result = tool
            .execute(serde_json::json!({ "agent": "claude", "node_path": "src/app.py" }))
            .await
            .unwrap();
        assert_eq!(result.status(), Some("ok"));
        assert_eq!(result.content["released"][0], "src/app.py");
        assert_eq!(result.content["reindex_triggered"], true);
    }

    #[tokio::test]
    async fn test_release_without_claim_is_not_found() {
        let (tool, _) = fixture().await;
        let result = tool
            .execute(serde_json::json!({ "agent": "claude", "node_path": "src/app.py" }))
            .await
            .unwrap();
        assert!(result.is_error);
        assert_eq!(result.status(), Some("not_found"));
    }
}
