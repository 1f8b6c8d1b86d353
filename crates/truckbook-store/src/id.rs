//! Record identifier generation

use uuid::Uuid;

/// New record id: millisecond timestamp prefix followed by random bits
///
/// UUIDv7 text sorts by creation time, so ids also reflect insertion order.
pub fn generate_id() -> String {
    Uuid::now_v7().simple().to_string()
}
