//! Store wiring over the persistence backends

use std::path::PathBuf;
use std::rc::Rc;

use tracing::debug;
use truckbook_domain::repository::KeyValueStore;
use truckbook_infra::{FileKeyValueStore, MemoryKeyValueStore};
use truckbook_store::{MonthlyExpenseStore, TripStore};
use truckbook_types::Result;

use crate::config::Config;

/// Both stores, sharing one backend
#[derive(Debug)]
pub struct Stores {
    pub trips: TripStore,
    pub monthly_expenses: MonthlyExpenseStore,
}

impl Stores {
    /// Open both stores over `backend`
    pub fn open(backend: Rc<dyn KeyValueStore>) -> Self {
        Self {
            trips: TripStore::open(Rc::clone(&backend)),
            monthly_expenses: MonthlyExpenseStore::open(backend),
        }
    }
}

/// Open the file backend in the configured data directory
pub fn open_file_backend(config: &Config) -> Result<FileKeyValueStore> {
    open_file_backend_at(config.data_dir()?)
}

/// Open the file backend at a custom directory
pub fn open_file_backend_at(data_dir: PathBuf) -> Result<FileKeyValueStore> {
    let backend = FileKeyValueStore::open(data_dir)?;
    debug!(dir = %backend.dir().display(), "opened file storage");
    Ok(backend)
}

/// Open both stores in the configured data directory
pub fn open_stores(config: &Config) -> Result<Stores> {
    Ok(Stores::open(Rc::new(open_file_backend(config)?)))
}

/// Open both stores at a custom directory
pub fn open_stores_at(data_dir: PathBuf) -> Result<Stores> {
    Ok(Stores::open(Rc::new(open_file_backend_at(data_dir)?)))
}

/// Open both stores without durable storage
pub fn open_memory_stores() -> Stores {
    Stores::open(Rc::new(MemoryKeyValueStore::new()))
}
