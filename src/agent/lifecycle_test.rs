// ABOUTME: Tests for the derived agent lifecycle state machine.
// ABOUTME: Covers materialize, retire-at-zero, and explicit status changes.

use std::sync::Arc;

use chrono::Utc;

use crate::claim::{Claim, ClaimMode};
use crate::error::CoordError;
use crate::graph::NodeId;
use crate::store::{GraphStore, MemoryStore};

use super::{AgentLifecycle, AgentStatus};

async fn store_with_claim(agent: &str) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .put_claim(Claim {
            node_id: NodeId::from_path("src/app.py"),
            node_path: "src/app.py".to_string(),
            agent: agent.to_string(),
            mode: ClaimMode::Exclusive,
            reason: "refactor".to_string(),
            created_at: Utc::now(),
            batch_id: None,
        })
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn test_materialize_creates_working_agent() {
    let lifecycle = AgentLifecycle::new(Arc::new(MemoryStore::new()));
    let agent = lifecycle.materialize("claude").await.unwrap();
    assert_eq!(agent.status, AgentStatus::Working);
}

#[tokio::test]
async fn test_materialize_preserves_explicit_status() {
    let store = store_with_claim("claude").await;
    let lifecycle = AgentLifecycle::new(store);

    lifecycle.materialize("claude").await.unwrap();
    lifecycle
        .set_status("claude", AgentStatus::Waiting)
        .await
        .unwrap();

    let agent = lifecycle.materialize("claude").await.unwrap();
    assert_eq!(agent.status, AgentStatus::Waiting);
}

#[tokio::test]
async fn test_retire_if_idle_keeps_agent_with_claims() {
    let store = store_with_claim("claude").await;
    let lifecycle = AgentLifecycle::new(store);
    lifecycle.materialize("claude").await.unwrap();

    assert!(!lifecycle.retire_if_idle("claude").await.unwrap());
    assert!(lifecycle.get("claude").await.unwrap().is_some());
}

#[tokio::test]
async fn test_retire_if_idle_deletes_claimless_agent() {
    let lifecycle = AgentLifecycle::new(Arc::new(MemoryStore::new()));
    lifecycle.materialize("claude").await.unwrap();

    assert!(lifecycle.retire_if_idle("claude").await.unwrap());
    assert!(lifecycle.get("claude").await.unwrap().is_none());
    // Second call: nothing left to retire.
    assert!(!lifecycle.retire_if_idle("claude").await.unwrap());
}

#[tokio::test]
async fn test_set_status_on_absent_agent_is_not_found() {
    let lifecycle = AgentLifecycle::new(Arc::new(MemoryStore::new()));
    let err = lifecycle
        .set_status("ghost", AgentStatus::Idle)
        .await
        .unwrap_err();
    assert!(matches!(err, CoordError::NotFound(_)));
}
