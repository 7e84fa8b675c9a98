/// Catalog items and usage events are keyed by opaque strings (UUIDs when
/// generated server-side).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh identifier for a new catalog item or usage event.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}
