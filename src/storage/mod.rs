//! Storage implementations for the player store

pub mod in_memory;

pub use in_memory::InMemoryPlayerStore;
