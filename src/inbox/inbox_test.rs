// ABOUTME: Tests for inbox messaging semantics.
// ABOUTME: Covers validation, ordering, idempotent reads, and atomic clear.

use std::sync::Arc;

use crate::error::CoordError;
use crate::store::MemoryStore;

use super::Inbox;

fn inbox() -> Inbox {
    Inbox::new(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn test_send_self_addressed_is_invalid() {
    let inbox = inbox();
    let err = inbox
        .send("claude", "claude", "hello me", None)
        .await
        .unwrap_err();
    assert!(matches!(err, CoordError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_send_empty_content_is_invalid() {
    let inbox = inbox();
    for content in ["", "   ", "\n\t"] {
        let err = inbox.send("gemini", "claude", content, None).await.unwrap_err();
        assert!(matches!(err, CoordError::InvalidArgument(_)));
    }
    // Nothing was delivered.
    assert!(inbox.messages("claude").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_send_assigns_utc_timestamp_and_delivers() {
    let inbox = inbox();
    let sent = inbox
        .send("gemini", "claude", "can I get src/app.py?", Some("src/app.py"))
        .await
        .unwrap();
    assert_eq!(sent.to, "claude");
    assert_eq!(sent.node_path.as_deref(), Some("src/app.py"));

    let received = inbox.messages("claude").await.unwrap();
    assert_eq!(received, vec![sent]);
}

#[tokio::test]
async fn test_recipient_need_not_exist() {
    // The inbox is independent of claims: messages to a not-yet-active
    // agent are held until read.
    let inbox = inbox();
    inbox
        .send("gemini", "newcomer", "welcome", None)
        .await
        .unwrap();
    assert_eq!(inbox.messages("newcomer").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_messages_ordered_and_read_is_idempotent() {
    let inbox = inbox();
    inbox.send("gemini", "claude", "first", None).await.unwrap();
    inbox.send("cursor", "claude", "second", None).await.unwrap();

    let first_read = inbox.messages("claude").await.unwrap();
    let second_read = inbox.messages("claude").await.unwrap();
    assert_eq!(first_read, second_read);
    assert_eq!(first_read[0].content, "first");
    assert_eq!(first_read[1].content, "second");
}

#[tokio::test]
async fn test_clear_empties_inbox_and_reports_count() {
    let inbox = inbox();
    inbox.send("gemini", "claude", "one", None).await.unwrap();
    inbox.send("gemini", "claude", "two", None).await.unwrap();

    assert_eq!(inbox.clear("claude").await.unwrap(), 2);
    assert!(inbox.messages("claude").await.unwrap().is_empty());
    assert_eq!(inbox.clear("claude").await.unwrap(), 0);
}

#[tokio::test]
async fn test_inboxes_are_isolated_per_agent() {
    let inbox = inbox();
    inbox.send("gemini", "claude", "for claude", None).await.unwrap();
    inbox.send("claude", "gemini", "for gemini", None).await.unwrap();

    inbox.clear("claude").await.unwrap();
    assert_eq!(inbox.messages("gemini").await.unwrap().len(), 1);
}
