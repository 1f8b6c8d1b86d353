//! Infrastructure layer - persistence backends

pub mod persistence;

pub use persistence::{FileKeyValueStore, MemoryKeyValueStore};
