// ABOUTME: Coordinator module - wires the store, write gate, and engine
// ABOUTME: components together behind one construction point.

mod coordinator;

pub use coordinator::*;
