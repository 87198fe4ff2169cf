// ABOUTME: Defines the ToolResult type - a unified structure for tool
// ABOUTME: execution outcomes with JSON content and error state.

use serde::Serialize;

/// Result of a tool execution.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// The response payload as a JSON value.
    pub content: serde_json::Value,

    /// Whether this result represents an error.
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful JSON result.
    pub fn json(content: impl Serialize) -> Self {
        Self {
            content: serde_json::to_value(content).unwrap_or(serde_json::Value::Null),
            is_error: false,
        }
    }

    /// Create an error result with a status and message, the shape
    /// expected by calling agents for negotiable failures.
    pub fn error(status: &str, message: impl Into<String>) -> Self {
        Self {
            content: serde_json::json!({
                "status": status,
                "message": message.into(),
            }),
            is_error: true,
        }
    }

    /// The "status" field of the payload, if present.
    pub fn status(&self) -> Option<&str> {
        self.content.get("status").and_then(|s| s.as_str())
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::json(serde_json::json!({}))
    }
}
