//! Persistence trait definitions

use truckbook_types::Result;

/// Storage key holding the serialized trip collection
pub const TRIPS_KEY: &str = "truck-management-data";

/// Storage key holding the serialized monthly-expense collection
pub const MONTHLY_EXPENSES_KEY: &str = "truck-monthly-expenses";

/// Durable key-value storage for serialized collections
///
/// Each key maps to one opaque blob. Writers always replace the whole blob.
pub trait KeyValueStore {
    /// Read the blob stored under `key`, `None` when nothing was written yet
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`
    fn write(&self, key: &str, blob: &str) -> Result<()>;
}
