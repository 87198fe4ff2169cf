// ABOUTME: MemoryStore - in-memory GraphStore behind a single tokio Mutex.
// ABOUTME: Default backing store for tests and single-process deployments.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::agent::Agent;
use crate::claim::Claim;
use crate::error::StoreError;
use crate::graph::{DependencyEdge, Node, NodeId};
use crate::inbox::Message;

use super::GraphStore;

#[derive(Default)]
struct State {
    nodes: HashMap<NodeId, Node>,
    /// path -> id index for registry lookups.
    paths: HashMap<String, NodeId>,
    edges: HashSet<DependencyEdge>,
    /// Keyed by (node id, agent name): at most one claim per pair.
    claims: HashMap<(NodeId, String), Claim>,
    agents: HashMap<String, Agent>,
    inboxes: HashMap<String, Vec<Message>>,
}

/// In-memory graph store.
///
/// All state sits behind one mutex, so every call is atomic on its own.
/// Check-then-act sequences spanning several calls are serialized by the
/// coordinator's write gate, not here.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn upsert_node(&self, node: Node) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.paths.insert(node.path.clone(), node.id.clone());
        state.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    async fn node_by_id(&self, id: &NodeId) -> Result<Option<Node>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.nodes.get(id).cloned())
    }

    async fn node_by_path(&self, path: &str) -> Result<Option<Node>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .paths
            .get(path)
            .and_then(|id| state.nodes.get(id))
            .cloned())
    }

    async fn delete_node(&self, id: &NodeId) -> Result<bool, StoreError> {
        let mut state = self.state.lock().await;
        match state.nodes.remove(id) {
            Some(node) => {
                state.paths.remove(&node.path);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_nodes(&self) -> Result<Vec<Node>, StoreError> {
        let state = self.state.lock().await;
        let mut nodes: Vec<_> = state.nodes.values().cloned().collect();
        nodes.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(nodes)
    }

    async fn upsert_edge(&self, edge: DependencyEdge) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.edges.insert(edge);
        Ok(())
    }

    async fn edges_to(&self, id: &NodeId) -> Result<Vec<DependencyEdge>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.edges.iter().filter(|e| &e.to == id).cloned().collect())
    }

    async fn edges_from(&self, id: &NodeId) -> Result<Vec<DependencyEdge>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .edges
            .iter()
            .filter(|e| &e.from == id)
            .cloned()
            .collect())
    }

    async fn remove_edges_of(&self, id: &NodeId) -> Result<usize, StoreError> {
        let mut state = self.state.lock().await;
        let before = state.edges.len();
        state.edges.retain(|e| &e.from != id && &e.to != id);
        Ok(before - state.edges.len())
    }

    async fn put_claim(&self, claim: Claim) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state
            .claims
            .insert((claim.node_id.clone(), claim.agent.clone()), claim);
        Ok(())
    }

    async fn claim(&self, id: &NodeId, agent: &str) -> Result<Option<Claim>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.claims.get(&(id.clone(), agent.to_string())).cloned())
    }

    async fn claims_on(&self, id: &NodeId) -> Result<Vec<Claim>, StoreError> {
        let state = self.state.lock().await;
        let mut claims: Vec<_> = state
            .claims
            .values()
            .filter(|c| &c.node_id == id)
            .cloned()
            .collect();
        claims.sort_by(|a, b| a.agent.cmp(&b.agent));
        Ok(claims)
    }

    async fn claims_by(&self, agent: &str) -> Result<Vec<Claim>, StoreError> {
        let state = self.state.lock().await;
        let mut claims: Vec<_> = state
            .claims
            .values()
            .filter(|c| c.agent == agent)
            .cloned()
            .collect();
        claims.sort_by(|a, b| a.node_path.cmp(&b.node_path));
        Ok(claims)
    }

    async fn all_claims(&self) -> Result<Vec<Claim>, StoreError> {
        let state = self.state.lock().await;
        let mut claims: Vec<_> = state.claims.values().cloned().collect();
        claims.sort_by(|a, b| (&a.agent, &a.node_path).cmp(&(&b.agent, &b.node_path)));
        Ok(claims)
    }

    async fn delete_claim(&self, id: &NodeId, agent: &str) -> Result<bool, StoreError> {
        let mut state = self.state.lock().await;
        Ok(state
            .claims
            .remove(&(id.clone(), agent.to_string()))
            .is_some())
    }

    async fn put_agent(&self, agent: Agent) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.agents.insert(agent.name.clone(), agent);
        Ok(())
    }

    async fn agent(&self, name: &str) -> Result<Option<Agent>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.agents.get(name).cloned())
    }

    async fn delete_agent(&self, name: &str) -> Result<bool, StoreError> {
        let mut state = self.state.lock().await;
        Ok(state.agents.remove(name).is_some())
    }

    async fn append_message(&self, message: Message) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state
            .inboxes
            .entry(message.to.clone())
            .or_default()
            .push(message);
        Ok(())
    }

    async fn messages_for(&self, agent: &str) -> Result<Vec<Message>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.inboxes.get(agent).cloned().unwrap_or_default())
    }

    async fn clear_messages(&self, agent: &str) -> Result<usize, StoreError> {
        let mut state = self.state.lock().await;
        Ok(state.inboxes.remove(agent).map(|m| m.len()).unwrap_or(0))
    }
}
