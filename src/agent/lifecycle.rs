// ABOUTME: AgentLifecycle - materializes agent records from claim existence.
// ABOUTME: Absent -> Working on first claim, Absent again at claim count zero.

use std::sync::Arc;

use crate::error::CoordError;
use crate::store::GraphStore;

use super::{Agent, AgentStatus};

/// Derives agent existence from active claims.
///
/// Agents are never created or deleted directly: `materialize` runs when
/// a claim is granted, `retire_if_idle` after every claim removal. The
/// informational status is only changed on explicit request.
#[derive(Clone)]
pub struct AgentLifecycle {
    store: Arc<dyn GraphStore>,
}

impl AgentLifecycle {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Ensure the agent record exists with status Working. An existing
    /// record keeps its explicitly set status.
    pub async fn materialize(&self, name: &str) -> Result<Agent, CoordError> {
        if let Some(agent) = self.store.agent(name).await? {
            return Ok(agent);
        }
        let agent = Agent {
            name: name.to_string(),
            status: AgentStatus::Working,
        };
        self.store.put_agent(agent.clone()).await?;
        Ok(agent)
    }

    /// Delete the agent record if its claim count reached zero.
    /// Returns true when the agent was retired.
    pub async fn retire_if_idle(&self, name: &str) -> Result<bool, CoordError> {
        if !self.store.claims_by(name).await?.is_empty() {
            return Ok(false);
        }
        Ok(self.store.delete_agent(name).await?)
    }

    /// Set the informational status. NotFound if the agent holds no claims.
    pub async fn set_status(&self, name: &str, status: AgentStatus) -> Result<Agent, CoordError> {
        let mut agent = self.store.agent(name).await?.ok_or_else(|| {
            CoordError::NotFound(format!(
                "Agent '{}' not found. Has it registered by claiming a node?",
                name
            ))
        })?;
        agent.status = status;
        self.store.put_agent(agent.clone()).await?;
        Ok(agent)
    }

    /// Look up an agent record.
    pub async fn get(&self, name: &str) -> Result<Option<Agent>, CoordError> {
        Ok(self.store.agent(name).await?)
    }
}
