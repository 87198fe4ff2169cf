// ABOUTME: QueryCodebaseTool - explore the repository graph and check the
// ABOUTME: claim status of matching nodes.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::claim::QueryFilter;
use crate::coordinator::Coordinator;
use crate::tool::{Tool, ToolResult};

/// Tool for snapshot queries over the graph with claim status.
pub struct QueryCodebaseTool {
    coordinator: Arc<Coordinator>,
}

impl QueryCodebaseTool {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl Tool for QueryCodebaseTool {
    fn name(&self) -> &str {
        "query_codebase"
    }

    fn description(&self) -> &str {
        "Search the indexed codebase structure and see which nodes are claimed, by whom, \
         and why. Filters combine: path prefix, substring, glob pattern, and node kind."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path_prefix": {
                    "type": "string",
                    "description": "Match paths starting with this prefix"
                },
                "contains": {
                    "type": "string",
                    "description": "Match paths containing this substring"
                },
                "pattern": {
                    "type": "string",
                    "description": "Glob pattern to match paths (e.g. \"src/*.py\")"
                },
                "kind": {
                    "type": "string",
                    "enum": ["codebase", "directory", "file", "function", "class"],
                    "description": "Restrict to one node kind"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum results (default 50, max 200)"
                }
            }
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let filter: QueryFilter = serde_json::from_value(params)?;

        match self.coordinator.claims().query_codebase(&filter).await {
            Ok(nodes) => Ok(ToolResult::json(serde_json::json!({
                "status": "ok",
                "count": nodes.len(),
                "nodes": nodes,
            }))),
            Err(err) => super::coord_error(err),
        }
    }
}
