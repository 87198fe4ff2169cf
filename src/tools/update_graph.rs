// ABOUTME: UpdateGraphTool - apply upserts/deletes reported after an edit,
// ABOUTME: cascading node deletions into claim cleanup.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::coordinator::Coordinator;
use crate::graph::GraphChange;
use crate::tool::{Tool, ToolResult};

/// Tool for batched structural graph updates.
pub struct UpdateGraphTool {
    coordinator: Arc<Coordinator>,
}

impl UpdateGraphTool {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for UpdateGraphTool {
    fn name(&self) -> &str {
        "update_graph"
    }

    fn description(&self) -> &str {
        "Report structural changes (created, modified, or deleted files, directories, \
         functions, classes) so the graph stays in sync with the codebase. Deleting a node \
         removes any claims and dependency edges referencing it."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "agent": {
                    "type": "string",
                    "description": "Your agent identifier (the reporter of these changes)"
                },
                "changes": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "op": { "type": "string", "enum": ["upsert", "delete"] },
                            "path": { "type": "string" },
                            "kind": {
                                "type": "string",
                                "enum": ["directory", "file", "function", "class"],
                                "description": "Required for upserts"
                            },
                            "depth": { "type": "integer" },
                            "extension": { "type": "string" },
                            "size_bytes": { "type": "integer" },
                            "line": { "type": "integer" }
                        },
                        "required": ["op", "path"]
                    }
                }
            },
            "required": ["agent", "changes"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            agent: String,
            changes: Vec<GraphChange>,
        }
        let params: Params = serde_json::from_value(params)?;

        match self
            .coordinator
            .sync()
            .update_graph(&params.agent, &params.changes)
            .await
        {
            Ok(report) => Ok(ToolResult::json(serde_json::json!({
                "status": "ok",
                "applied": report.applied,
                "errors": report.errors,
                "inconsistencies": report.inconsistencies,
            }))),
            Err(err) => super::coord_error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> UpdateGraphTool {
        UpdateGraphTool::new(Arc::new(Coordinator::in_memory()))
    }

    #[tokio::test]
    async fn test_upsert_batch() {
        let result = tool()
            .execute(serde_json::json!({
                "agent": "indexer",
                "changes": [
                    { "op": "upsert", "path": "src", "kind": "directory", "depth": 1 },
                    { "op": "upsert", "path": "src/app.py", "kind": "file",
                      "extension": "py", "size_bytes": 120 },
                ],
            }))
            .await
            .unwrap();
        assert_eq!(result.status(), Some("ok"));
        assert_eq!(result.content["applied"], 2);
        assert_eq!(result.content["errors"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_empty_changes_is_invalid() {
        let result = tool()
            .execute(serde_json::json!({ "agent": "indexer", "changes": [] }))
            .await
            .unwrap();
        assert!(result.is_error);
        assert_eq!(result.status(), Some("invalid"));
    }

    #[tokio::test]
    async fn test_partial_failure_reported() {
        let result = tool()
            .execute(serde_json::json!({
                "agent": "indexer",
                "changes": [
                    { "op": "upsert", "path": "src/app.py", "kind": "file",
                      "extension": "py", "size_bytes": 120 },
                    { "op": "delete", "path": "never/was.py" },
                ],
            }))
            .await
            .unwrap();
        assert_eq!(result.status(), Some("ok"));
        assert_eq!(result.content["applied"], 1);
        assert_eq!(result.content["errors"].as_array().unwrap().len(), 1);
    }
}
