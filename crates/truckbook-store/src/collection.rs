//! Generic persisted record collection
//!
//! Both stores are a [`RecordCollection`] plus their own queries. The
//! collection owns the records (inside a [`SnapshotChannel`]), loads them
//! once at open, and rewrites the whole serialized collection after every
//! mutation. Storage failures are logged and never surface to callers.

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use truckbook_domain::repository::KeyValueStore;
use truckbook_types::{Error, MonthlyExpenseRecord, Result, TripRecord};

use crate::channel::{SnapshotChannel, SubscriptionId};

/// A persisted entity with a store-assigned id
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Short name used in log output
    const KIND: &'static str;

    fn id(&self) -> &str;
}

impl Record for TripRecord {
    const KIND: &'static str = "trip";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for MonthlyExpenseRecord {
    const KIND: &'static str = "monthly_expense";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Result of reading a collection at startup
#[derive(Debug)]
pub enum LoadOutcome<R> {
    /// Stored data parsed successfully
    Loaded(Vec<R>),
    /// Nothing stored under the key yet
    Missing,
    /// Stored data could not be read or parsed; start empty
    Recovered { cause: Error },
}

impl<R> LoadOutcome<R> {
    pub fn into_records(self) -> Vec<R> {
        match self {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Missing | LoadOutcome::Recovered { .. } => Vec::new(),
        }
    }
}

/// How a store's collection was obtained when it was opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { count: usize },
    Missing,
    Recovered { cause: String },
}

impl<R> From<&LoadOutcome<R>> for LoadStatus {
    fn from(outcome: &LoadOutcome<R>) -> Self {
        match outcome {
            LoadOutcome::Loaded(records) => LoadStatus::Loaded {
                count: records.len(),
            },
            LoadOutcome::Missing => LoadStatus::Missing,
            LoadOutcome::Recovered { cause } => LoadStatus::Recovered {
                cause: cause.to_string(),
            },
        }
    }
}

/// Serialize a full collection in order
pub fn serialize_collection<R: Record>(records: &[R]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse a serialized collection
pub fn deserialize_collection<R: Record>(blob: &str) -> Result<Vec<R>> {
    Ok(serde_json::from_str(blob)?)
}

/// Read and parse the collection under `key`, never failing
pub fn load_collection<R: Record>(backend: &dyn KeyValueStore, key: &str) -> LoadOutcome<R> {
    let blob = match backend.read(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return LoadOutcome::Missing,
        Err(cause) => return LoadOutcome::Recovered { cause },
    };

    match deserialize_collection(&blob) {
        Ok(records) => LoadOutcome::Loaded(records),
        Err(cause) => LoadOutcome::Recovered { cause },
    }
}

/// Ordered, persisted, observable collection of records
pub struct RecordCollection<R: Record> {
    key: String,
    backend: Rc<dyn KeyValueStore>,
    records: SnapshotChannel<Vec<R>>,
    load_status: LoadStatus,
}

impl<R: Record> RecordCollection<R> {
    /// Load the collection stored under `key`, falling back to empty
    pub fn open(backend: Rc<dyn KeyValueStore>, key: &str) -> Self {
        let outcome = load_collection::<R>(backend.as_ref(), key);
        let load_status = LoadStatus::from(&outcome);

        match &outcome {
            LoadOutcome::Loaded(records) => {
                debug!(kind = R::KIND, key, count = records.len(), "loaded collection")
            }
            LoadOutcome::Missing => debug!(kind = R::KIND, key, "no stored collection, starting empty"),
            LoadOutcome::Recovered { cause } => warn!(
                kind = R::KIND,
                key,
                error = %cause,
                "stored collection unreadable, starting empty"
            ),
        }

        Self {
            key: key.to_string(),
            backend,
            records: SnapshotChannel::new(outcome.into_records()),
            load_status,
        }
    }

    /// All records in insertion order
    pub fn records(&self) -> &[R] {
        self.records.get()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records().iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Append a record, notify observers, then persist
    pub fn insert(&mut self, record: R) {
        self.records.update(|records| records.push(record));
        self.persist();
    }

    /// Remove the record with `id`. Observers and storage are updated either way.
    pub fn remove(&mut self, id: &str) -> bool {
        let remaining: Vec<R> = self
            .records()
            .iter()
            .filter(|r| r.id() != id)
            .cloned()
            .collect();
        let removed = remaining.len() != self.len();
        self.records.publish(remaining);
        self.persist();
        removed
    }

    /// Observe the collection; the observer gets the current snapshot at once
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Vec<R>) + 'static,
    {
        self.records.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.records.unsubscribe(id)
    }

    /// Write the whole collection. Failure leaves memory authoritative.
    fn persist(&self) {
        let result = serialize_collection(self.records())
            .and_then(|blob| self.backend.write(&self.key, &blob));

        match result {
            Ok(()) => debug!(kind = R::KIND, key = %self.key, count = self.len(), "persisted collection"),
            Err(e) => error!(
                kind = R::KIND,
                key = %self.key,
                error = %e,
                "failed to persist collection, keeping in-memory state"
            ),
        }
    }
}

impl<R: Record + fmt::Debug> fmt::Debug for RecordCollection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordCollection")
            .field("key", &self.key)
            .field("records", &self.records)
            .field("load_status", &self.load_status)
            .finish()
    }
}
