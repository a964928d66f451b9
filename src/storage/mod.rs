//! Storage backends implementing [`crate::core::EntityStore`]

pub mod in_memory;

pub use in_memory::InMemoryStore;
