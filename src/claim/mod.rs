// ABOUTME: Claim module - the coordination core that grants, conflicts,
// ABOUTME: propagates, and revokes access markers on graph nodes.

mod manager;
mod types;

pub use manager::*;
pub use types::*;
