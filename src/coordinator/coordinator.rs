// ABOUTME: Coordinator - the shared coordination state space for all agents.
// ABOUTME: One store, one write gate, one instance per deployment.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::agent::AgentLifecycle;
use crate::claim::ClaimManager;
use crate::inbox::Inbox;
use crate::resolver::DependencyResolver;
use crate::store::{GraphStore, MemoryStore};
use crate::sync::SyncService;

/// Entry point for the coordination engine.
///
/// All components share one backing store and one write gate, so every
/// claim/release/update sequence is a single atomic check-then-act unit:
/// two concurrent Exclusive requests on the same node can never both
/// observe "no holder".
pub struct Coordinator {
    claims: ClaimManager,
    sync: SyncService,
    inbox: Inbox,
    lifecycle: AgentLifecycle,
}

impl Coordinator {
    /// Build a coordinator over an arbitrary backing store.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self::with_depth(store, crate::resolver::DEFAULT_DEPTH)
    }

    /// Build a coordinator with a custom auto-claim propagation depth.
    pub fn with_depth(store: Arc<dyn GraphStore>, depth: u32) -> Self {
        let write_gate = Arc::new(Mutex::new(()));
        let lifecycle = AgentLifecycle::new(store.clone());
        let resolver = DependencyResolver::with_depth(store.clone(), depth);
        let claims = ClaimManager::new(
            store.clone(),
            resolver,
            lifecycle.clone(),
            write_gate.clone(),
        );
        let sync = SyncService::new(store.clone(), lifecycle.clone(), write_gate);
        let inbox = Inbox::new(store);
        Self {
            claims,
            sync,
            inbox,
            lifecycle,
        }
    }

    /// Build a coordinator over the bundled in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The claim/release core.
    pub fn claims(&self) -> &ClaimManager {
        &self.claims
    }

    /// Structural graph updates from the external indexer.
    pub fn sync(&self) -> &SyncService {
        &self.sync
    }

    /// Per-agent messaging.
    pub fn inbox(&self) -> &Inbox {
        &self.inbox
    }

    /// Agent status management.
    pub fn lifecycle(&self) -> &AgentLifecycle {
        &self.lifecycle
    }
}
