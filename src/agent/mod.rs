// ABOUTME: Agent module - derived agent records and the lifecycle manager.
// ABOUTME: An agent exists exactly while it holds at least one claim.

mod lifecycle;
mod types;

pub use lifecycle::*;
pub use types::*;

#[cfg(test)]
mod lifecycle_test;
