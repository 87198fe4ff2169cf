// ABOUTME: SyncService - applies update_graph batches (upsert/delete) and
// ABOUTME: heals claims left dangling by node deletions.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::agent::AgentLifecycle;
use crate::error::CoordError;
use crate::graph::{ChangeOp, GraphChange, Node, NodeKind, UpdateReport};
use crate::store::GraphStore;

/// Applies structural changes reported after an edit.
///
/// Per-change validation failures are collected in the report without
/// aborting the batch. Deleting a node cascades into its claims and
/// dependency edges; a cascaded claim held by an agent other than the
/// caller is an Inconsistency: logged, healed, and reported, but the
/// operation still succeeds.
pub struct SyncService {
    store: Arc<dyn GraphStore>,
    lifecycle: AgentLifecycle,
    write_gate: Arc<Mutex<()>>,
}

impl SyncService {
    pub fn new(
        store: Arc<dyn GraphStore>,
        lifecycle: AgentLifecycle,
        write_gate: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            store,
            lifecycle,
            write_gate,
        }
    }

    /// Apply a batch of upserts/deletes on behalf of `caller`.
    pub async fn update_graph(
        &self,
        caller: &str,
        changes: &[GraphChange],
    ) -> Result<UpdateReport, CoordError> {
        if changes.is_empty() {
            return Err(CoordError::InvalidArgument(
                "changes list cannot be empty".to_string(),
            ));
        }

        let _guard = self.write_gate.lock().await;

        let mut report = UpdateReport::default();
        for change in changes {
            if change.path.trim().is_empty() {
                report.errors.push("change has an empty path".to_string());
                continue;
            }
            match change.op {
                ChangeOp::Upsert => self.apply_upsert(change, &mut report).await?,
                ChangeOp::Delete => self.apply_delete(caller, change, &mut report).await?,
            }
        }

        tracing::info!(
            caller,
            applied = report.applied,
            errors = report.errors.len(),
            inconsistencies = report.inconsistencies.len(),
            "graph update applied"
        );
        Ok(report)
    }

    async fn apply_upsert(
        &self,
        change: &GraphChange,
        report: &mut UpdateReport,
    ) -> Result<(), CoordError> {
        let Some(kind) = change.kind.clone() else {
            report
                .errors
                .push(format!("upsert of '{}' is missing a node kind", change.path));
            return Ok(());
        };
        if matches!(kind, NodeKind::Codebase { .. }) {
            report.errors.push(format!(
                "upsert of '{}': codebase nodes are created by the initial index, not batches",
                change.path
            ));
            return Ok(());
        }
        self.store
            .upsert_node(Node::new(change.path.clone(), kind))
            .await?;
        report.applied += 1;
        Ok(())
    }

    async fn apply_delete(
        &self,
        caller: &str,
        change: &GraphChange,
        report: &mut UpdateReport,
    ) -> Result<(), CoordError> {
        let Some(node) = self.store.node_by_path(&change.path).await? else {
            report
                .errors
                .push(format!("delete of '{}': node not found", change.path));
            return Ok(());
        };

        // Cascade: claims first, so no claim ever dangles on a dead node.
        for claim in self.store.claims_on(&node.id).await? {
            self.store.delete_claim(&node.id, &claim.agent).await?;
            if claim.agent != caller {
                tracing::warn!(
                    node = %node.path,
                    holder = %claim.agent,
                    mode = ?claim.mode,
                    "inconsistency: removed claim dangling on deleted node"
                );
                report.inconsistencies.push(format!(
                    "removed {} claim by '{}' on deleted node '{}'",
                    claim.mode.label(),
                    claim.agent,
                    node.path
                ));
            }
            self.lifecycle.retire_if_idle(&claim.agent).await?;
        }

        self.store.remove_edges_of(&node.id).await?;
        self.store.delete_node(&node.id).await?;
        report.applied += 1;
        Ok(())
    }
}
