// ABOUTME: Root module for dibs - multi-agent codebase coordination engine.
// ABOUTME: Re-exports all public types from submodules.

pub mod agent;
pub mod claim;
pub mod coordinator;
pub mod error;
pub mod graph;
pub mod inbox;
pub mod prelude;
pub mod registry;
pub mod resolver;
pub mod store;
pub mod sync;
pub mod tool;
pub mod tools;

pub use coordinator::Coordinator;
pub use error::DibsError;
