// ABOUTME: Message - one entry in an agent's inbox, with sender, content,
// ABOUTME: optional node path, and a server-assigned UTC timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message delivered to an agent's inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub content: String,
    /// Path of the node the message is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_path: Option<String>,
    pub timestamp: DateTime<Utc>,
}
