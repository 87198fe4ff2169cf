// ABOUTME: GraphChange - one upsert/delete entry in an update_graph batch,
// ABOUTME: as reported by the external indexer after an edit.

use serde::{Deserialize, Serialize};

use super::NodeKind;

/// What a batch entry does to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOp {
    Upsert,
    Delete,
}

/// One structural change reported after an edit.
///
/// Only Directory/File/Function/Class nodes are valid targets; the
/// Codebase root is created out-of-band by the initial index. `kind`
/// is required for upserts; deletes identify the node by path alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphChange {
    pub op: ChangeOp,
    pub path: String,
    #[serde(flatten)]
    pub kind: Option<NodeKind>,
}

/// Result of applying an update_graph batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReport {
    /// Number of changes applied successfully.
    pub applied: usize,
    /// Per-change validation errors; the batch does not abort on them.
    pub errors: Vec<String>,
    /// Dangling claims found and healed during delete cascades.
    pub inconsistencies: Vec<String>,
}
