// ABOUTME: ClaimManager - grants, denies, and revokes claims, enforcing
// ABOUTME: exclusivity and driving auto-claim propagation to dependents.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::agent::AgentLifecycle;
use crate::error::CoordError;
use crate::registry::NodeRegistry;
use crate::resolver::{DependencyResolver, Direction};
use crate::store::GraphStore;

use super::{
    AgentActivity, BlockedDependent, Claim, ClaimMode, ClaimOutcome, ClaimSummary, QueryFilter,
    QueryRow, ReleaseOutcome,
};

const QUERY_LIMIT_DEFAULT: usize = 50;
const QUERY_LIMIT_MAX: usize = 200;

/// The coordination core.
///
/// # Claim semantics
///
/// - **At most one Exclusive claim per node**, system-wide. A second
///   Exclusive request from a different agent gets a Conflict value.
/// - **Shared never conflicts**: any number of Shared claims co-exist,
///   including alongside another agent's Exclusive claim.
/// - **Idempotent re-claim:** an agent claiming a node it already holds
///   updates the claim in place instead of duplicating it.
/// - **Auto-claim propagation:** a newly Exclusive claim puts Shared
///   claims on the node's direct dependents, grouped by a batch id so
///   they release together. Dependents the agent already claimed Shared
///   manually are left untouched.
/// - **Downgrade tears down the batch:** re-claiming an Exclusively held
///   node as Shared converts it into a manual Shared claim and releases
///   the auto-claims its batch propagated.
///
/// Every mutating operation runs as one atomic check-then-act unit under
/// the shared write gate; conflict detection and the subsequent write
/// can never interleave with another request.
pub struct ClaimManager {
    store: Arc<dyn GraphStore>,
    registry: NodeRegistry,
    resolver: DependencyResolver,
    lifecycle: AgentLifecycle,
    write_gate: Arc<Mutex<()>>,
}

impl ClaimManager {
    pub fn new(
        store: Arc<dyn GraphStore>,
        resolver: DependencyResolver,
        lifecycle: AgentLifecycle,
        write_gate: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            registry: NodeRegistry::new(store.clone()),
            store,
            resolver,
            lifecycle,
            write_gate,
        }
    }

    /// Claim a node for an agent.
    ///
    /// Fails InvalidArgument on an empty reason and NotFound on an
    /// unknown path. An Exclusive collision with another agent returns
    /// [`ClaimOutcome::Conflict`]; resolution is pushed to the inbox,
    /// the engine never queues or retries. Re-claiming an Exclusively
    /// held node as Shared downgrades it to a manual Shared claim and
    /// releases its auto-claim batch.
    pub async fn claim_node(
        &self,
        agent: &str,
        path: &str,
        mode: ClaimMode,
        reason: &str,
    ) -> Result<ClaimOutcome, CoordError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(CoordError::InvalidArgument(
                "claim reason is required: describe what you plan to do with this node"
                    .to_string(),
            ));
        }

        let _guard = self.write_gate.lock().await;

        let node = self.registry.resolve(path).await?;
        let existing = self.store.claim(&node.id, agent).await?;

        if mode == ClaimMode::Exclusive {
            let holders = self.store.claims_on(&node.id).await?;
            if let Some(other) = holders
                .iter()
                .find(|c| c.mode == ClaimMode::Exclusive && c.agent != agent)
            {
                tracing::debug!(
                    agent,
                    path,
                    holder = %other.agent,
                    "exclusive claim conflict"
                );
                return Ok(ClaimOutcome::Conflict {
                    holder: other.agent.clone(),
                    reason: other.reason.clone(),
                });
            }
        }

        // Propagate only when the node becomes Exclusively held by this
        // agent; an idempotent Exclusive re-claim does not re-propagate.
        let newly_exclusive = mode == ClaimMode::Exclusive
            && existing.as_ref().map(|c| c.mode) != Some(ClaimMode::Exclusive);
        // A downgrade turns the claim into a manual Shared claim; the
        // batch it rooted is torn down below.
        let downgraded = mode == ClaimMode::Shared
            && existing.as_ref().map(|c| c.mode) == Some(ClaimMode::Exclusive);

        let batch_id = if newly_exclusive {
            Some(Uuid::new_v4())
        } else if downgraded {
            None
        } else {
            existing.as_ref().and_then(|c| c.batch_id)
        };

        let claim = Claim {
            node_id: node.id.clone(),
            node_path: node.path.clone(),
            agent: agent.to_string(),
            mode,
            reason: reason.to_string(),
            created_at: existing
                .as_ref()
                .map(|c| c.created_at)
                .unwrap_or_else(Utc::now),
            batch_id,
        };
        self.store.put_claim(claim.clone()).await?;

        if downgraded {
            if let Some(batch) = existing.as_ref().and_then(|c| c.batch_id) {
                let freed = self.release_batch(agent, batch).await?;
                tracing::info!(
                    agent,
                    path,
                    freed = freed.len(),
                    "auto-claim batch released on downgrade"
                );
            }
        }

        let mut auto_claimed = Vec::new();
        let mut blocked = Vec::new();
        if newly_exclusive {
            let dependents = self
                .resolver
                .impact_set(&node.id, Direction::Dependents, agent)
                .await?;
            for (dep_id, dep_path) in dependents {
                let holders = self.store.claims_on(&dep_id).await?;
                if let Some(other) = holders
                    .iter()
                    .find(|c| c.mode == ClaimMode::Exclusive && c.agent != agent)
                {
                    blocked.push(BlockedDependent {
                        node_path: dep_path,
                        holder: other.agent.clone(),
                        reason: other.reason.clone(),
                    });
                    continue;
                }
                let prior = holders.iter().find(|c| c.agent == agent);
                // A manual Shared claim (no batch) stays exactly as the
                // agent requested it; the dependent is already covered.
                if prior.is_some_and(|c| c.batch_id.is_none()) {
                    continue;
                }
                self.store
                    .put_claim(Claim {
                        node_id: dep_id,
                        node_path: dep_path.clone(),
                        agent: agent.to_string(),
                        mode: ClaimMode::Shared,
                        reason: format!("Impacted by exclusive work on '{}'", node.path),
                        created_at: prior.map(|c| c.created_at).unwrap_or_else(Utc::now),
                        batch_id,
                    })
                    .await?;
                auto_claimed.push(dep_path);
            }
        }

        self.lifecycle.materialize(agent).await?;

        tracing::info!(
            agent,
            path,
            mode = ?mode,
            auto_claimed = auto_claimed.len(),
            blocked = blocked.len(),
            "claim granted"
        );
        Ok(ClaimOutcome::Granted {
            claim,
            auto_claimed,
            blocked,
        })
    }

    /// Release an agent's claim on a node.
    ///
    /// Fails NotFound when the agent holds no claim there. Releasing the
    /// root of an auto-claim batch releases the batch's Shared claims
    /// too, except members still covered by another of the agent's
    /// Exclusive claims; those are re-batched under the survivor.
    pub async fn release_node(&self, agent: &str, path: &str) -> Result<ReleaseOutcome, CoordError> {
        let _guard = self.write_gate.lock().await;

        let node = self.registry.resolve(path).await?;
        let existing = self.store.claim(&node.id, agent).await?.ok_or_else(|| {
            CoordError::NotFound(format!("No claim by '{}' on '{}' was found", agent, path))
        })?;

        self.store.delete_claim(&node.id, agent).await?;
        let mut released = vec![node.path.clone()];

        if existing.mode == ClaimMode::Exclusive {
            if let Some(batch) = existing.batch_id {
                released.extend(self.release_batch(agent, batch).await?);
            }
        }

        let agent_retired = self.lifecycle.retire_if_idle(agent).await?;
        if agent_retired {
            tracing::info!(agent, "last claim released, reindex signal emitted");
        }
        tracing::info!(agent, path, released = released.len(), "claim released");

        Ok(ReleaseOutcome {
            released,
            reindex_triggered: agent_retired,
            agent_retired,
        })
    }

    /// Release the Shared members of an auto-claim batch, retaining any
    /// member that is a dependent of a still-held Exclusive claim.
    async fn release_batch(&self, agent: &str, batch: Uuid) -> Result<Vec<String>, CoordError> {
        let remaining = self.store.claims_by(agent).await?;
        let survivors: Vec<&Claim> = remaining
            .iter()
            .filter(|c| c.mode == ClaimMode::Exclusive)
            .collect();

        let mut survivor_sets = Vec::with_capacity(survivors.len());
        for survivor in &survivors {
            let set = self
                .resolver
                .impact_set(&survivor.node_id, Direction::Dependents, agent)
                .await?;
            survivor_sets.push((survivor.batch_id, set));
        }

        let mut released = Vec::new();
        for member in remaining
            .iter()
            .filter(|c| c.mode == ClaimMode::Shared && c.batch_id == Some(batch))
        {
            let keeper = survivor_sets
                .iter()
                .find(|(_, set)| set.iter().any(|(id, _)| id == &member.node_id));
            match keeper {
                Some((survivor_batch, _)) => {
                    // Still covered: hand the claim to the surviving batch
                    // so it is freed when that claim releases. A survivor
                    // without a batch must not strip the member's own.
                    let mut kept = member.clone();
                    kept.batch_id = (*survivor_batch).or(kept.batch_id);
                    self.store.put_claim(kept).await?;
                }
                None => {
                    self.store.delete_claim(&member.node_id, agent).await?;
                    released.push(member.node_path.clone());
                }
            }
        }
        Ok(released)
    }

    /// Snapshot of every active agent and its claims. No side effects.
    pub async fn get_active_agents(&self) -> Result<Vec<AgentActivity>, CoordError> {
        use std::collections::BTreeMap;

        let mut grouped: BTreeMap<String, Vec<ClaimSummary>> = BTreeMap::new();
        for claim in self.store.all_claims().await? {
            grouped.entry(claim.agent).or_default().push(ClaimSummary {
                node_path: claim.node_path,
                mode: claim.mode,
                reason: claim.reason,
                since: claim.created_at,
            });
        }

        let mut activities = Vec::with_capacity(grouped.len());
        for (agent, claims) in grouped {
            let status = self
                .lifecycle
                .get(&agent)
                .await?
                .map(|a| a.status)
                .unwrap_or(crate::agent::AgentStatus::Working);
            activities.push(AgentActivity {
                agent,
                status,
                claims,
            });
        }
        Ok(activities)
    }

    /// Snapshot query over the graph with claim status. No side effects.
    pub async fn query_codebase(&self, filter: &QueryFilter) -> Result<Vec<QueryRow>, CoordError> {
        if let Some(kind) = filter.kind.as_deref() {
            if !matches!(
                kind,
                "codebase" | "directory" | "file" | "function" | "class"
            ) {
                return Err(CoordError::InvalidArgument(format!(
                    "invalid kind '{}': must be codebase, directory, file, function, or class",
                    kind
                )));
            }
        }
        let pattern = match filter.pattern.as_deref() {
            Some(p) => Some(glob::Pattern::new(p).map_err(|e| {
                CoordError::InvalidArgument(format!("invalid glob pattern '{}': {}", p, e))
            })?),
            None => None,
        };
        let limit = filter
            .limit
            .unwrap_or(QUERY_LIMIT_DEFAULT)
            .clamp(1, QUERY_LIMIT_MAX);

        let mut rows = Vec::new();
        for node in self.store.list_nodes().await? {
            if rows.len() >= limit {
                break;
            }
            if let Some(prefix) = filter.path_prefix.as_deref() {
                if !node.path.starts_with(prefix) {
                    continue;
                }
            }
            if let Some(substring) = filter.contains.as_deref() {
                if !node.path.contains(substring) {
                    continue;
                }
            }
            if let Some(pattern) = &pattern {
                if !pattern.matches(&node.path) {
                    continue;
                }
            }
            if let Some(kind) = filter.kind.as_deref() {
                if node.kind.label() != kind {
                    continue;
                }
            }

            let claims = self.store.claims_on(&node.id).await?;
            if claims.is_empty() {
                rows.push(QueryRow {
                    path: node.path,
                    kind: node.kind.label().to_string(),
                    claimed_by: None,
                    mode: None,
                    reason: None,
                });
                continue;
            }
            for claim in claims {
                if rows.len() >= limit {
                    break;
                }
                rows.push(QueryRow {
                    path: node.path.clone(),
                    kind: node.kind.label().to_string(),
                    claimed_by: Some(claim.agent),
                    mode: Some(claim.mode),
                    reason: Some(claim.reason),
                });
            }
        }
        Ok(rows)
    }
}
