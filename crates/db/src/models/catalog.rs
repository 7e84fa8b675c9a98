//! Catalog item model and DTOs.

use gorgina_core::export::CatalogRow;
use gorgina_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `catalog` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CatalogItem {
    pub id: EntityId,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub pattern: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// Time of the most recently recorded usage event.
    pub last_activity: Option<Timestamp>,
    /// Note of the most recently recorded usage event.
    pub last_note: Option<String>,
    pub hidden: bool,
    pub created_at: Timestamp,
}

impl CatalogItem {
    /// Borrow this item as a CSV export row.
    pub fn export_row(&self) -> CatalogRow<'_> {
        CatalogRow {
            id: &self.id,
            category: self.category.as_deref(),
            brand: self.brand.as_deref(),
            color: self.color.as_deref(),
            pattern: self.pattern.as_deref(),
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            price: self.price,
            last_activity: self.last_activity,
        }
    }
}

/// DTO for inserting or fully replacing a catalog item.
///
/// Every user-editable field is written; `None` stores NULL. `hidden` and
/// the usage cache are left untouched on replace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PutCatalogItem {
    pub id: EntityId,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub pattern: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Already rounded to cents by the caller.
    pub price: Option<f64>,
}
