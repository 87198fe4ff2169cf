// ABOUTME: Claim data types - modes, the claim record, and the outcome
// ABOUTME: values returned by claim and release operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::AgentStatus;
use crate::graph::NodeId;

/// How strongly a claim marks its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimMode {
    /// Only the holder should edit the node. At most one per node.
    Exclusive,
    /// Advisory: the node is impacted by someone's exclusive work.
    /// Edits are permitted but should preserve interfaces.
    Shared,
}

impl ClaimMode {
    /// The mode's wire name ("exclusive" or "shared").
    pub fn label(&self) -> &'static str {
        match self {
            ClaimMode::Exclusive => "exclusive",
            ClaimMode::Shared => "shared",
        }
    }
}

/// An access marker held by one agent on one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub node_id: NodeId,
    /// Repo-relative path of the node, denormalized for reporting.
    pub node_path: String,
    pub agent: String,
    pub mode: ClaimMode,
    /// Free-text description of the planned work. Never empty.
    pub reason: String,
    pub created_at: DateTime<Utc>,
    /// Groups an Exclusive claim with the Shared claims it auto-generated,
    /// so they release together. Every engine-granted Exclusive claim
    /// carries Some; None marks a manually requested Shared claim.
    pub batch_id: Option<Uuid>,
}

/// A dependent that could not be auto-claimed because another agent
/// holds it Exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedDependent {
    pub node_path: String,
    pub holder: String,
    pub reason: String,
}

/// Result of a claim request. Conflict is an expected outcome, not an
/// error: resolution is pushed to the messaging inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClaimOutcome {
    /// The claim was created or updated in place.
    Granted {
        claim: Claim,
        /// Direct dependents that received auto Shared claims.
        auto_claimed: Vec<String>,
        /// Direct dependents skipped because another agent holds them
        /// Exclusively. Informational, never silently dropped.
        blocked: Vec<BlockedDependent>,
    },
    /// A different agent already holds an Exclusive claim on the node.
    Conflict { holder: String, reason: String },
}

/// Result of a successful release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseOutcome {
    /// Paths released, the requested node first, then any batch members.
    pub released: Vec<String>,
    /// True when the agent's claim set emptied and the external indexer
    /// should re-index.
    pub reindex_triggered: bool,
    /// True when the agent record was removed along with its last claim.
    pub agent_retired: bool,
}

/// One claim as reported by get_active_agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSummary {
    pub node_path: String,
    pub mode: ClaimMode,
    pub reason: String,
    pub since: DateTime<Utc>,
}

/// An active agent and everything it currently holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentActivity {
    pub agent: String,
    pub status: AgentStatus,
    pub claims: Vec<ClaimSummary>,
}

/// Filter for query_codebase. All criteria are conjunctive; empty
/// filter matches everything up to the limit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryFilter {
    /// Match paths starting with this prefix.
    #[serde(default)]
    pub path_prefix: Option<String>,
    /// Match paths containing this substring.
    #[serde(default)]
    pub contains: Option<String>,
    /// Match paths against a glob pattern (e.g. "src/*.py").
    #[serde(default)]
    pub pattern: Option<String>,
    /// Restrict to one node kind ("file", "directory", ...).
    #[serde(default)]
    pub kind: Option<String>,
    /// Maximum result rows; clamped to 1..=200, default 50.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One query_codebase result row. Nodes with several claims produce one
/// row per claim; unclaimed nodes produce a single row with no holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRow {
    pub path: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ClaimMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
