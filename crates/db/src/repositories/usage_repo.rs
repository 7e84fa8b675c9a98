//! Repository for the `activity` table and the usage cache on `catalog`.
//!
//! Every write here keeps `catalog.last_activity` / `catalog.last_note`
//! equal to the item's most recently created event. Writes lock the item's
//! catalog row first, so concurrent writers for the same item serialize and
//! the last committed writer is also the latest event.

use gorgina_core::types::new_id;
use sqlx::PgPool;

use super::catalog_repo::{CatalogRepo, COLUMNS as CATALOG_COLUMNS};
use crate::models::activity::{RecordedUsage, UsageEvent};
use crate::models::catalog::CatalogItem;
use crate::transaction::in_transaction;

/// Column list for the `activity` table.
const COLUMNS: &str = "id, cid, ts, note";

/// Records usage events and maintains the per-item usage cache.
pub struct UsageRepo;

impl UsageRepo {
    /// Record that an item was used now.
    ///
    /// Inserts the event and refreshes the item's cache in one transaction.
    /// Fails with `RowNotFound`, leaving no event behind, if the item does
    /// not exist.
    pub async fn record(pool: &PgPool, cid: &str) -> Result<RecordedUsage, sqlx::Error> {
        let cid = cid.to_string();
        let id = new_id();
        let ts = chrono::Utc::now();

        in_transaction(pool, move |conn| {
            Box::pin(async move {
                CatalogRepo::lock_inner(&mut *conn, &cid).await?;

                let insert_query = format!(
                    "INSERT INTO activity (id, cid, ts) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
                );
                let event = sqlx::query_as::<_, UsageEvent>(&insert_query)
                    .bind(&id)
                    .bind(&cid)
                    .bind(ts)
                    .fetch_one(&mut *conn)
                    .await?;

                // The new event has no note yet, so the cached note resets.
                let update_query = format!(
                    "UPDATE catalog SET last_activity = $2, last_note = NULL \
                     WHERE id = $1 \
                     RETURNING {CATALOG_COLUMNS}"
                );
                let item = sqlx::query_as::<_, CatalogItem>(&update_query)
                    .bind(&cid)
                    .bind(event.ts)
                    .fetch_optional(&mut *conn)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;

                Ok(RecordedUsage { event, item })
            })
        })
        .await
    }

    /// Set the note on the item's latest usage event and mirror it into the
    /// item's cache.
    ///
    /// "Latest" is by creation order, not by timestamp. Fails with
    /// `RowNotFound`, changing nothing, if the item has no events.
    pub async fn set_latest_note(
        pool: &PgPool,
        cid: &str,
        note: Option<&str>,
    ) -> Result<UsageEvent, sqlx::Error> {
        let cid = cid.to_string();
        let note = note.map(str::to_string);

        in_transaction(pool, move |conn| {
            Box::pin(async move {
                CatalogRepo::lock_inner(&mut *conn, &cid).await?;

                let update_event = format!(
                    "UPDATE activity SET note = $2 \
                     WHERE id = ( \
                        SELECT id FROM activity WHERE cid = $1 ORDER BY seq DESC LIMIT 1 \
                     ) \
                     RETURNING {COLUMNS}"
                );
                let event = sqlx::query_as::<_, UsageEvent>(&update_event)
                    .bind(&cid)
                    .bind(&note)
                    .fetch_optional(&mut *conn)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;

                sqlx::query("UPDATE catalog SET last_note = $2 WHERE id = $1")
                    .bind(&cid)
                    .bind(&note)
                    .execute(&mut *conn)
                    .await?;

                Ok(event)
            })
        })
        .await
    }

    /// Find a usage event by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<UsageEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activity WHERE id = $1");
        sqlx::query_as::<_, UsageEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Usage history of one item, newest first.
    pub async fn list_for_item(pool: &PgPool, cid: &str) -> Result<Vec<UsageEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activity WHERE cid = $1 ORDER BY seq DESC");
        sqlx::query_as::<_, UsageEvent>(&query)
            .bind(cid)
            .fetch_all(pool)
            .await
    }

    /// Every usage event, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<UsageEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activity ORDER BY seq");
        sqlx::query_as::<_, UsageEvent>(&query)
            .fetch_all(pool)
            .await
    }
}
