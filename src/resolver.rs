// ABOUTME: DependencyResolver - bounded-depth impact sets over dependency
// ABOUTME: edges, used to drive auto-claim propagation.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use crate::claim::ClaimMode;
use crate::error::CoordError;
use crate::graph::NodeId;
use crate::store::GraphStore;

/// Which way to walk the dependency edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Nodes that depend on the root (impacted by changes to it).
    Dependents,
    /// Nodes the root depends on.
    Dependencies,
}

/// Computes bounded-depth impact sets from dependency edges.
///
/// Edge data is externally maintained and possibly stale; the resolver
/// walks the latest synced snapshot as-is. Output is deterministic for
/// a fixed snapshot (sorted by path).
#[derive(Clone)]
pub struct DependencyResolver {
    store: Arc<dyn GraphStore>,
    max_depth: u32,
}

/// Default traversal depth: direct neighbors only, which keeps
/// auto-claim sets small and meaningful.
pub const DEFAULT_DEPTH: u32 = 1;

impl DependencyResolver {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self::with_depth(store, DEFAULT_DEPTH)
    }

    pub fn with_depth(store: Arc<dyn GraphStore>, max_depth: u32) -> Self {
        Self { store, max_depth }
    }

    /// The impact set of `root` for `agent`, as (id, path) pairs sorted
    /// by path.
    ///
    /// Excludes the root itself and any node the agent already holds
    /// Exclusively (re-claiming those would be noise).
    pub async fn impact_set(
        &self,
        root: &NodeId,
        direction: Direction,
        agent: &str,
    ) -> Result<Vec<(NodeId, String)>, CoordError> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        visited.insert(root.clone());

        let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
        queue.push_back((root.clone(), 0));

        let mut found: Vec<NodeId> = Vec::new();
        while let Some((id, depth)) = queue.pop_front() {
            if depth >= self.max_depth {
                continue;
            }
            let edges = match direction {
                Direction::Dependents => self.store.edges_to(&id).await?,
                Direction::Dependencies => self.store.edges_from(&id).await?,
            };
            for edge in edges {
                let next = match direction {
                    Direction::Dependents => edge.from,
                    Direction::Dependencies => edge.to,
                };
                if visited.insert(next.clone()) {
                    found.push(next.clone());
                    queue.push_back((next, depth + 1));
                }
            }
        }

        let mut result = Vec::with_capacity(found.len());
        for id in found {
            let held = self
                .store
                .claim(&id, agent)
                .await?
                .is_some_and(|c| c.mode == ClaimMode::Exclusive);
            if held {
                continue;
            }
            // Edges may reference nodes deleted since indexing; skip those.
            if let Some(node) = self.store.node_by_id(&id).await? {
                result.push((id, node.path));
            }
        }
        result.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::claim::Claim;
    use crate::graph::{DependencyEdge, Node, NodeKind};
    use crate::store::{GraphStore, MemoryStore};

    async fn seed(store: &MemoryStore, paths: &[&str]) {
        for path in paths {
            store
                .upsert_node(Node::new(
                    *path,
                    NodeKind::File {
                        extension: "py".to_string(),
                        size_bytes: 0,
                    },
                ))
                .await
                .unwrap();
        }
    }

    async fn depend(store: &MemoryStore, from: &str, to: &str) {
        store
            .upsert_edge(DependencyEdge::new(
                NodeId::from_path(from),
                NodeId::from_path(to),
            ))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_direct_dependents_only_at_default_depth() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, &["app.py", "utils.py", "deep.py"]).await;
        // deep -> utils -> app: both "depend on" their target
        depend(&store, "utils.py", "app.py").await;
        depend(&store, "deep.py", "utils.py").await;

        let resolver = DependencyResolver::new(store);
        let set = resolver
            .impact_set(&NodeId::from_path("app.py"), Direction::Dependents, "claude")
            .await
            .unwrap();

        let paths: Vec<_> = set.into_iter().map(|(_, p)| p).collect();
        assert_eq!(paths, vec!["utils.py"]);
    }

    #[tokio::test]
    async fn test_depth_two_reaches_transitive_dependents() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, &["app.py", "utils.py", "deep.py"]).await;
        depend(&store, "utils.py", "app.py").await;
        depend(&store, "deep.py", "utils.py").await;

        let resolver = DependencyResolver::with_depth(store, 2);
        let set = resolver
            .impact_set(&NodeId::from_path("app.py"), Direction::Dependents, "claude")
            .await
            .unwrap();

        let paths: Vec<_> = set.into_iter().map(|(_, p)| p).collect();
        assert_eq!(paths, vec!["deep.py", "utils.py"]);
    }

    #[tokio::test]
    async fn test_dependencies_direction() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, &["app.py", "utils.py"]).await;
        depend(&store, "app.py", "utils.py").await;

        let resolver = DependencyResolver::new(store);
        let set = resolver
            .impact_set(&NodeId::from_path("app.py"), Direction::Dependencies, "claude")
            .await
            .unwrap();

        let paths: Vec<_> = set.into_iter().map(|(_, p)| p).collect();
        assert_eq!(paths, vec!["utils.py"]);
    }

    #[tokio::test]
    async fn test_excludes_root_on_cycle() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, &["a.py", "b.py"]).await;
        depend(&store, "a.py", "b.py").await;
        depend(&store, "b.py", "a.py").await;

        let resolver = DependencyResolver::with_depth(store, 5);
        let set = resolver
            .impact_set(&NodeId::from_path("a.py"), Direction::Dependents, "claude")
            .await
            .unwrap();

        let paths: Vec<_> = set.into_iter().map(|(_, p)| p).collect();
        assert_eq!(paths, vec!["b.py"]);
    }

    #[tokio::test]
    async fn test_excludes_nodes_agent_holds_exclusively() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, &["app.py", "utils.py", "other.py"]).await;
        depend(&store, "utils.py", "app.py").await;
        depend(&store, "other.py", "app.py").await;
        store
            .put_claim(Claim {
                node_id: NodeId::from_path("utils.py"),
                node_path: "utils.py".to_string(),
                agent: "claude".to_string(),
                mode: ClaimMode::Exclusive,
                reason: "already mine".to_string(),
                created_at: Utc::now(),
                batch_id: None,
            })
            .await
            .unwrap();

        let resolver = DependencyResolver::new(store);
        let set = resolver
            .impact_set(&NodeId::from_path("app.py"), Direction::Dependents, "claude")
            .await
            .unwrap();

        let paths: Vec<_> = set.into_iter().map(|(_, p)| p).collect();
        assert_eq!(paths, vec!["other.py"]);
    }

    #[tokio::test]
    async fn test_skips_edges_to_deleted_nodes() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, &["app.py"]).await;
        // Edge references a node that was never (or no longer) indexed.
        depend(&store, "ghost.py", "app.py").await;

        let resolver = DependencyResolver::new(store);
        let set = resolver
            .impact_set(&NodeId::from_path("app.py"), Direction::Dependents, "claude")
            .await
            .unwrap();
        assert!(set.is_empty());
    }
}
