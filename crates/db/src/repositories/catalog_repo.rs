//! Repository for the `catalog` table.

use gorgina_core::search::{like_pattern, search_clause};
use sqlx::{PgConnection, PgPool};

use crate::models::catalog::{CatalogItem, PutCatalogItem};

/// Column list for the `catalog` table.
pub(crate) const COLUMNS: &str = "id, category, brand, color, pattern, title, description, \
    price, last_activity, last_note, hidden, created_at";

/// Provides upsert, lookup, listing and search over catalog items.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Insert a new item, or replace every user field of an existing one.
    ///
    /// Fields that are `None` are stored as NULL rather than left unchanged.
    /// `hidden`, `last_activity`, `last_note` and `created_at` survive a
    /// replace.
    pub async fn upsert(pool: &PgPool, input: &PutCatalogItem) -> Result<CatalogItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO catalog \
                (id, category, brand, color, pattern, title, description, price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO UPDATE SET \
                category = EXCLUDED.category, \
                brand = EXCLUDED.brand, \
                color = EXCLUDED.color, \
                pattern = EXCLUDED.pattern, \
                title = EXCLUDED.title, \
                description = EXCLUDED.description, \
                price = EXCLUDED.price \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogItem>(&query)
            .bind(&input.id)
            .bind(&input.category)
            .bind(&input.brand)
            .bind(&input.color)
            .bind(&input.pattern)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find an item by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<CatalogItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM catalog WHERE id = $1");
        sqlx::query_as::<_, CatalogItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every item in insertion order. Hidden items are included.
    pub async fn list(pool: &PgPool) -> Result<Vec<CatalogItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM catalog ORDER BY seq");
        sqlx::query_as::<_, CatalogItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Items whose text fields contain `text` (case-insensitive), in the same
    /// order as [`CatalogRepo::list`].
    pub async fn search(pool: &PgPool, text: &str) -> Result<Vec<CatalogItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM catalog WHERE {} ORDER BY seq",
            search_clause(1)
        );
        sqlx::query_as::<_, CatalogItem>(&query)
            .bind(like_pattern(text))
            .fetch_all(pool)
            .await
    }

    /// Set the `hidden` flag. Returns `None` if no item has this id.
    pub async fn set_hidden(
        pool: &PgPool,
        id: &str,
        hidden: bool,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let query = format!("UPDATE catalog SET hidden = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, CatalogItem>(&query)
            .bind(id)
            .bind(hidden)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Transaction helpers
    // -----------------------------------------------------------------------

    /// Lock an item's row for the rest of the transaction.
    ///
    /// Fails with `RowNotFound` if the item does not exist.
    pub(crate) async fn lock_inner(conn: &mut PgConnection, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT id FROM catalog WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok(())
    }
}
