//! Storage implementations for the app catalog

pub mod in_memory;

pub use in_memory::InMemoryAppStore;
