// ABOUTME: ClaimNodeTool - claim a node before editing it, so other
// ABOUTME: agents know not to touch it.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::claim::{ClaimMode, ClaimOutcome};
use crate::coordinator::Coordinator;
use crate::tool::{Tool, ToolResult};

/// Tool for claiming a node Exclusively or Shared.
pub struct ClaimNodeTool {
    coordinator: Arc<Coordinator>,
}

impl ClaimNodeTool {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for ClaimNodeTool {
    fn name(&self) -> &str {
        "claim_node"
    }

    fn description(&self) -> &str {
        "Claim a file or directory you are working on so other agents know not to touch it. \
         Call this before editing. If another agent already holds an exclusive claim you get \
         a conflict response telling you who is working on it and why."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "agent": {
                    "type": "string",
                    "description": "Your agent identifier (e.g. \"claude\")"
                },
                "node_path": {
                    "type": "string",
                    "description": "Repo-relative path of the node to claim (e.g. \"src/app.py\")"
                },
                "mode": {
                    "type": "string",
                    "enum": ["exclusive", "shared"],
                    "description": "exclusive: only you should edit; shared: advisory marker"
                },
                "reason": {
                    "type": "string",
                    "description": "What you plan to do with this node. Required, cannot be empty."
                }
            },
            "required": ["agent", "node_path", "mode", "reason"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            agent: String,
            node_path: String,
            mode: ClaimMode,
            reason: String,
        }
        let params: Params = serde_json::from_value(params)?;

        let outcome = self
            .coordinator
            .claims()
            .claim_node(&params.agent, &params.node_path, params.mode, &params.reason)
            .await;
        match outcome {
            Ok(ClaimOutcome::Granted {
                claim,
                auto_claimed,
                blocked,
            }) => Ok(ToolResult::json(serde_json::json!({
                "status": "ok",
                "claim": claim,
                "auto_claimed": auto_claimed,
                "blocked": blocked,
            }))),
            Ok(ClaimOutcome::Conflict { holder, reason }) => {
                Ok(ToolResult::json(serde_json::json!({
                    "status": "conflict",
                    "holder": holder,
                    "reason": reason,
                    "message": format!(
                        "'{}' is currently working on '{}'. Negotiate via send_message.",
                        holder, params.node_path
                    ),
                })))
            }
            Err(err) => super::coord_error(err),
        }
    }
}
