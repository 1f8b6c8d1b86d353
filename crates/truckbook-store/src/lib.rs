//! Reactive in-memory stores for trips and monthly expenses
//!
//! Each store owns its collection, reloads it from a [`KeyValueStore`] when
//! opened, and after every mutation notifies observers and rewrites the
//! stored copy. Stores are single-threaded values; pass them explicitly to
//! whatever needs them.
//!
//! [`KeyValueStore`]: truckbook_domain::repository::KeyValueStore

pub mod channel;
pub mod collection;
pub mod id;
pub mod monthly_expense;
pub mod trip;

pub use channel::{SnapshotChannel, SubscriptionId};
pub use collection::{LoadOutcome, LoadStatus, Record, RecordCollection};
pub use monthly_expense::MonthlyExpenseStore;
pub use trip::TripStore;
