// ABOUTME: GetMessagesTool - poll your inbox. Non-destructive; pair with
// ABOUTME: clear_messages once handled.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::coordinator::Coordinator;
use crate::tool::{Tool, ToolResult};

/// Tool for reading an agent's inbox without clearing it.
pub struct GetMessagesTool {
    coordinator: Arc<Coordinator>,
}

impl GetMessagesTool {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for GetMessagesTool {
    fn name(&self) -> &str {
        "get_messages"
    }

    fn description(&self) -> &str {
        "Retrieve your messages, oldest first. Reading does not clear the inbox; call \
         clear_messages once you have handled them. Poll this periodically, there is no push."
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

        match self.coordinator.inbox().messages(&params.agent).await {
            Ok(messages) => Ok(ToolResult::json(serde_json::json!({
                "status": "ok",
                "count": messages.len(),
                "messages": messages,
            }))),
            Err(err) => super::coord_error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_is_non_destructive() {
        let coordinator = Arc::new(Coordinator::in_memory());
        coordinator
            .inbox()
            .send("gemini", "claude", "hello", None)
            .await
            .unwrap();

        let tool = GetMessagesTool::new(coordinator);
        for _ in 0..2 {
            let result = tool
                .execute(serde_json::json!({ "agent": "claude" }))
                .await
                .unwrap();
            assert_eq!(result.content["count"], 1);
            assert_eq!(result.content["messages"][0]["from"], "gemini");
        }
    }

    #[tokio::test]
    async fn test_empty_inbox() {
        let tool = GetMessagesTool::new(Arc::new(Coordinator::in_memory()));
        let result = tool
            .execute(serde_json::json!({ "agent": "claude" }))
            .await
            .unwrap();
        assert_eq!(result.content["count"], 0);
        assert_eq!(result.content["messages"], serde_json::json!([]));
    }
}
