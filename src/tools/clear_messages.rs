// ABOUTME: ClearMessagesTool - empty your inbox in one atomic step.
// ABOUTME: All-or-nothing; there is no selective delete.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::coordinator::Coordinator;
use crate::tool::{Tool, ToolResult};

/// Tool for atomically clearing an agent's inbox.
pub struct ClearMessagesTool {
    coordinator: Arc<Coordinator>,
}

impl ClearMessagesTool {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for ClearMessagesTool {
    fn name(&self) -> &str {
        "clear_messages"
    }

    fn description(&self) -> &str {
        "Empty your inbox after handling its messages. Irreversible and all-or-nothing."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "agent": {
                    "type": "string",
                    "description": "Your agent identifier"
                }
            },
            "required": ["agent"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            agent: String,
        }
        let params: Params = serde_json::from_value(params)?;

        match self.coordinator.inbox().clear(&params.agent).await {
            Ok(cleared) => Ok(ToolResult::json(serde_json::json!({
                "status": "ok",
                "cleared": cleared,
            }))),
            Err(err) => super::coord_error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clear_reports_count_then_zero() {
        let coordinator = Arc::new(Coordinator::in_memory());
        coordinator
            .inbox()
            .send("gemini", "claude", "one", None)
            .await
            .unwrap();
        coordinator
            .inbox()
            .send("gemini", "claude", "two", None)
            .await
            .unwrap();

        let tool = ClearMessagesTool::new(coordinator.clone());
        let result = tool
            .execute(serde_json::json!({ "agent": "claude" }))
            .await
            .unwrap();
        assert_eq!(result.content["cleared"], 2);

        let result = tool
            .execute(serde_json::json!({ "agent": "claude" }))
            .await
            .unwrap();
        assert_eq!(result.content["cleared"], 0);
        assert!(coordinator.inbox().messages("claude").await.unwrap().is_empty());
    }
}
