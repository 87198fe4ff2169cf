// ABOUTME: Defines all error types for the dibs library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under DibsError.

/// Top-level error type for the dibs library.
#[derive(Debug, thiserror::Error)]
pub enum DibsError {
    #[error("Coordination error: {0}")]
    Coord(#[from] CoordError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),
}

/// Errors from coordination operations (claims, agents, messages).
///
/// A claim conflict is NOT an error: it is an expected, negotiable
/// outcome and surfaces as [`crate::claim::ClaimOutcome::Conflict`].
#[derive(Debug, thiserror::Error)]
pub enum CoordError {
    /// The request was malformed; nothing was mutated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The referenced node, agent, or claim does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing store failed; propagated verbatim, never retried here.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from the backing graph store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Backend error: {0}")]
    Backend(#[source] anyhow::Error),
}

/// Errors from tool operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Execution failed: {0}")]
    Execution(#[source] anyhow::Error),
}
