// ABOUTME: Inbox - append-only per-agent message store with non-destructive
// ABOUTME: reads and an atomic bulk clear. No push; recipients poll.

use std::sync::Arc;

use chrono::Utc;

use crate::error::CoordError;
use crate::store::GraphStore;

use super::Message;

/// Per-agent messaging, used to negotiate contested resources when a
/// claim request comes back as a Conflict.
///
/// The inbox is independent of claims: a recipient does not need to
/// hold any claim (or exist yet) to receive messages.
#[derive(Clone)]
pub struct Inbox {
    store: Arc<dyn GraphStore>,
}

impl Inbox {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Append a message to the recipient's inbox with a server-assigned
    /// UTC timestamp.
    ///
    /// Fails InvalidArgument on self-addressed messages and on empty
    /// content, before any state mutation.
    pub async fn send(
        &self,
        from: &str,
        to: &str,
        content: &str,
        node_path: Option<&str>,
    ) -> Result<Message, CoordError> {
        if from == to {
            return Err(CoordError::InvalidArgument(
                "cannot send a message to yourself".to_string(),
            ));
        }
        let content = content.trim();
        if content.is_empty() {
            return Err(CoordError::InvalidArgument(
                "message content is required and cannot be empty".to_string(),
            ));
        }

        let message = Message {
            from: from.to_string(),
            to: to.to_string(),
            content: content.to_string(),
            node_path: node_path.map(str::to_string),
            timestamp: Utc::now(),
        };
        self.store.append_message(message.clone()).await?;
        tracing::info!(from, to, node = node_path.unwrap_or("general"), "message sent");
        Ok(message)
    }

    /// The agent's full inbox, oldest first. Repeatable; never clears.
    pub async fn messages(&self, agent: &str) -> Result<Vec<Message>, CoordError> {
        Ok(self.store.messages_for(agent).await?)
    }

    /// Empty the agent's inbox atomically. Returns the cleared count;
    /// clearing an empty inbox is not an error.
    pub async fn clear(&self, agent: &str) -> Result<usize, CoordError> {
        let cleared = self.store.clear_messages(agent).await?;
        if cleared > 0 {
            tracing::info!(agent, cleared, "inbox cleared");
        }
        Ok(cleared)
    }
}
