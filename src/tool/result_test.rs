// ABOUTME: Tests for ToolResult - constructors, status access, defaults.
// ABOUTME: Verifies result structure works correctly.

use super::*;

#[test]
fn test_json_result() {
    let result = ToolResult::json(serde_json::json!({ "status": "ok", "count": 3 }));
    assert!(!result.is_error);
    assert_eq!(result.status(), Some("ok"));
    assert_eq!(result.content["count"], 3);
}

#[test]
fn test_error_result() {
    let result = ToolResult::error("not_found", "no such node");
    assert!(result.is_error);
    assert_eq!(result.status(), Some("not_found"));
    assert_eq!(result.content["message"], "no such node");
}

#[test]
fn test_status_absent() {
    let result = ToolResult::json(serde_json::json!({ "nodes": [] }));
    assert_eq!(result.status(), None);
}

#[test]
fn test_default() {
    let result = ToolResult::default();
    assert!(!result.is_error);
    assert_eq!(result.content, serde_json::json!({}));
}
