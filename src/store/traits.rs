// ABOUTME: Defines the GraphStore trait - the seam between the engine and
// ABOUTME: whatever backing store holds nodes, edges, claims, and inboxes.

use async_trait::async_trait;

use crate::agent::Agent;
use crate::claim::Claim;
use crate::error::StoreError;
use crate::graph::{DependencyEdge, Node, NodeId};
use crate::inbox::Message;

/// A generic node/relationship store with CRUD and query primitives.
///
/// The engine treats the store as external: any failure is surfaced
/// verbatim as [`StoreError`] and never retried internally. Individual
/// calls are atomic; multi-call check-then-act sequences are serialized
/// by the engine's write gate, not by the store.
#[async_trait]
pub trait GraphStore: Send + Sync {
    // Nodes ------------------------------------------------------------

    /// Insert or replace a node, keyed by its id.
    async fn upsert_node(&self, node: Node) -> Result<(), StoreError>;

    /// Look up a node by id.
    async fn node_by_id(&self, id: &NodeId) -> Result<Option<Node>, StoreError>;

    /// Look up a node by repo-relative path.
    async fn node_by_path(&self, path: &str) -> Result<Option<Node>, StoreError>;

    /// Remove a node. Returns false if it did not exist. Does not touch
    /// edges or claims; cascades are the sync service's job.
    async fn delete_node(&self, id: &NodeId) -> Result<bool, StoreError>;

    /// All nodes, sorted by path.
    async fn list_nodes(&self) -> Result<Vec<Node>, StoreError>;

    // Dependency edges -------------------------------------------------

    /// Insert an edge if not already present.
    async fn upsert_edge(&self, edge: DependencyEdge) -> Result<(), StoreError>;

    /// Edges pointing AT the node, i.e. its direct dependents.
    async fn edges_to(&self, id: &NodeId) -> Result<Vec<DependencyEdge>, StoreError>;

    /// Edges leaving the node, i.e. its direct dependencies.
    async fn edges_from(&self, id: &NodeId) -> Result<Vec<DependencyEdge>, StoreError>;

    /// Remove every edge that references the node. Returns the count.
    async fn remove_edges_of(&self, id: &NodeId) -> Result<usize, StoreError>;

    // Claims -----------------------------------------------------------

    /// Insert or replace a claim, keyed by (node_id, agent).
    async fn put_claim(&self, claim: Claim) -> Result<(), StoreError>;

    /// The claim a specific agent holds on a specific node, if any.
    async fn claim(&self, id: &NodeId, agent: &str) -> Result<Option<Claim>, StoreError>;

    /// All claims on a node.
    async fn claims_on(&self, id: &NodeId) -> Result<Vec<Claim>, StoreError>;

    /// All claims held by an agent, sorted by node path.
    async fn claims_by(&self, agent: &str) -> Result<Vec<Claim>, StoreError>;

    /// Every active claim, sorted by (agent, node path).
    async fn all_claims(&self) -> Result<Vec<Claim>, StoreError>;

    /// Remove a claim. Returns false if it did not exist.
    async fn delete_claim(&self, id: &NodeId, agent: &str) -> Result<bool, StoreError>;

    // Agents -----------------------------------------------------------

    /// Insert or replace an agent record.
    async fn put_agent(&self, agent: Agent) -> Result<(), StoreError>;

    /// Look up an agent by name.
    async fn agent(&self, name: &str) -> Result<Option<Agent>, StoreError>;

    /// Remove an agent record. Returns false if it did not exist.
    async fn delete_agent(&self, name: &str) -> Result<bool, StoreError>;

    // Messages ---------------------------------------------------------

    /// Append a message to the recipient's inbox.
    async fn append_message(&self, message: Message) -> Result<(), StoreError>;

    /// The recipient's inbox, oldest first. Non-destructive.
    async fn messages_for(&self, agent: &str) -> Result<Vec<Message>, StoreError>;

    /// Empty the recipient's inbox atomically. Returns the cleared count.
    async fn clear_messages(&self, agent: &str) -> Result<usize, StoreError>;
}
