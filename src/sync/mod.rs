// ABOUTME: Sync module - structural graph updates reported by the external
// ABOUTME: indexer, cascading into claim cleanup.

mod service;

pub use service::*;
