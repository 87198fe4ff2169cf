// ABOUTME: Store module - the GraphStore trait consumed by the engine and
// ABOUTME: the bundled in-memory implementation.

mod memory;
mod traits;

pub use memory::*;
pub use traits::*;
