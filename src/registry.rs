// ABOUTME: NodeRegistry - resolves repo-relative paths to graph nodes.
// ABOUTME: Thin adapter over the store; the engine's NotFound boundary.

use std::sync::Arc;

use crate::error::CoordError;
use crate::graph::Node;
use crate::store::GraphStore;

/// Resolves stable node identity from paths.
#[derive(Clone)]
pub struct NodeRegistry {
    store: Arc<dyn GraphStore>,
}

impl NodeRegistry {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Resolve a path to its node, or NotFound if the repository has not
    /// been indexed (or the path never existed).
    pub async fn resolve(&self, path: &str) -> Result<Node, CoordError> {
        self.store
            .node_by_path(path)
            .await?
            .ok_or_else(|| {
                CoordError::NotFound(format!(
                    "Node '{}' not found. Has the repository been indexed?",
                    path
                ))
            })
    }

    /// Resolve a path if it exists; None is not an error here.
    pub async fn lookup(&self, path: &str) -> Result<Option<Node>, CoordError> {
        Ok(self.store.node_by_path(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_resolve_known_path() {
        let store = Arc::new(MemoryStore::new());
        store
            .upsert_node(Node::new("src", NodeKind::Directory { depth: 1 }))
            .await
            .unwrap();

        let registry = NodeRegistry::new(store);
        let node = registry.resolve("src").await.unwrap();
        assert_eq!(node.path, "src");
    }

    #[tokio::test]
    async fn test_resolve_unknown_path_is_not_found() {
        let registry = NodeRegistry::new(Arc::new(MemoryStore::new()));
        let err = registry.resolve("src/missing.py").await.unwrap_err();
        assert!(matches!(err, CoordError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_lookup_unknown_path_is_none() {
        let registry = NodeRegistry::new(Arc::new(MemoryStore::new()));
        assert!(registry.lookup("nope").await.unwrap().is_none());
    }
}
