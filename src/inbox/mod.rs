// ABOUTME: Inbox module - asynchronous per-agent messaging for negotiating
// ABOUTME: contested nodes. Independent of the claim subsystem.

mod inbox;
mod message;

pub use inbox::*;
pub use message::*;

#[cfg(test)]
mod inbox_test;
