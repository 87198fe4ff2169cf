// ABOUTME: Graph data model - nodes, dependency edges, and structural
// ABOUTME: change batches reported by the external indexer.

mod change;
mod edge;
mod node;

pub use change::*;
pub use edge::*;
pub use node::*;
