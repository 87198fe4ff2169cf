// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use dibs::prelude::*;` to get started quickly.

pub use crate::agent::{Agent, AgentLifecycle, AgentStatus};
pub use crate::claim::{
    AgentActivity, BlockedDependent, Claim, ClaimManager, ClaimMode, ClaimOutcome, ClaimSummary,
    QueryFilter, QueryRow, ReleaseOutcome,
};
pub use crate::coordinator::Coordinator;
pub use crate::error::{CoordError, DibsError, StoreError, ToolError};
pub use crate::graph::{
    ChangeOp, DependencyEdge, GraphChange, Node, NodeId, NodeKind, UpdateReport,
};
pub use crate::inbox::{Inbox, Message};
pub use crate::registry::NodeRegistry;
pub use crate::resolver::{DependencyResolver, Direction};
pub use crate::store::{GraphStore, MemoryStore};
pub use crate::sync::SyncService;
pub use crate::tool::{Registry, Tool, ToolDefinition, ToolResult};
pub use crate::tools::{
    register_all, ClaimNodeTool, ClearMessagesTool, GetActiveAgentsTool, GetMessagesTool,
    QueryCodebaseTool, ReleaseNodeTool, SendMessageTool, SetAgentStatusTool, UpdateGraphTool,
};
