// ABOUTME: Tool module - defines tools, registry, and execution.
// ABOUTME: The request/response surface agents drive the engine through.

mod registry;
mod result;
mod traits;

pub use registry::*;
pub use result::*;
pub use traits::*;

#[cfg(test)]
mod result_test;
