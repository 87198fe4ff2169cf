// ABOUTME: SendMessageTool - message another agent, typically to negotiate
// ABOUTME: access to a node they have claimed.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::coordinator::Coordinator;
use crate::tool::{Tool, ToolResult};

/// Tool for sending a message to another agent's inbox.
pub struct SendMessageTool {
    coordinator: Arc<Coordinator>,
}

impl SendMessageTool {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for SendMessageTool {
    fn name(&self) -> &str {
        "send_message"
    }

    fn description(&self) -> &str {
        "Send a message to another agent. Use this when an agent has claimed a node you \
         need, or to coordinate work. Messages wait in the recipient's inbox until they \
         poll get_messages."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "from": {
                    "type": "string",
                    "description": "Your agent identifier (the sender)"
                },
                "to": {
                    "type": "string",
                    "description": "The recipient agent's name"
                },
                "content": {
                    "type": "string",
                    "description": "Message text. Required, cannot be empty."
                },
                "node_path": {
                    "type": "string",
                    "description": "Optional path of the node this message is about"
                }
            },
            "required": ["from", "to", "content"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            from: String,
            to: String,
            content: String,
            node_path: Option<String>,
        }
        let params: Params = serde_json::from_value(params)?;

        match self
            .coordinator
            .inbox()
            .send(
                &params.from,
                &params.to,
                &params.content,
                params.node_path.as_deref(),
            )
            .await
        {
            Ok(message) => Ok(ToolResult::json(serde_json::json!({
                "status": "ok",
                "to": message.to,
                "timestamp": message.timestamp,
            }))),
            Err(err) => super::coord_error(err),
        }
    }
}
