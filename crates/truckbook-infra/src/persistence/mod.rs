//! Persistence implementations
//!
//! This module provides implementations of the `KeyValueStore` trait.

mod file_key_value_store;
mod memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use memory_key_value_store::MemoryKeyValueStore;
