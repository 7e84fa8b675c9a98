//! Usage event model.

use gorgina_core::export::ActivityRow;
use gorgina_core::types::{EntityId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::catalog::CatalogItem;

/// A row from the `activity` table: one "mark used" action on an item.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct UsageEvent {
    pub id: EntityId,
    /// Catalog item this event belongs to.
    pub cid: EntityId,
    pub ts: Timestamp,
    pub note: Option<String>,
}

impl UsageEvent {
    /// Borrow this event as a CSV export row.
    pub fn export_row(&self) -> ActivityRow<'_> {
        ActivityRow {
            id: &self.id,
            cid: &self.cid,
            ts: self.ts,
            note: self.note.as_deref(),
        }
    }
}

/// Result of recording a usage: the new event and the item's refreshed state.
#[derive(Debug, Clone, Serialize)]
pub struct RecordedUsage {
    pub event: UsageEvent,
    pub item: CatalogItem,
}
