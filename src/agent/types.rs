// ABOUTME: Agent record and status - a materialized view over claim
// ABOUTME: existence, never created or deleted directly by callers.

use serde::{Deserialize, Serialize};

/// Informational agent status, set explicitly by the agent itself.
/// The engine never infers it from activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Idle,
    Working,
    Waiting,
}

/// An agent known to the engine. Agents are identified by name
/// (e.g. "claude", "gemini") and exist iff they hold >= 1 active claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub status: AgentStatus,
}
