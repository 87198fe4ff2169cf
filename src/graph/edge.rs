// ABOUTME: DependencyEdge - directed "depends on" relation between two nodes.
// ABOUTME: Produced by the external indexer; read-only input to the resolver.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// A directed dependency: `from` depends on `to`.
///
/// Edges are owned by the external indexer. The engine never validates
/// their freshness; a stale edge set can under- or over-claim and that
/// is an accepted limitation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from: NodeId,
    pub to: NodeId,
}

impl DependencyEdge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}
