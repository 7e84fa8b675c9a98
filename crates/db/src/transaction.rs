//! Scoped transactions.
//!
//! [`in_transaction`] begins a transaction, hands the connection to a
//! closure and commits only if the closure returns `Ok`. Any error, or an
//! early return through `?`, drops the transaction, which rolls it back.

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

/// Run `f` inside a single database transaction.
///
/// ```ignore
/// let event = in_transaction(pool, |conn| {
///     Box::pin(async move {
///         sqlx::query("...").execute(&mut *conn).await?;
///         Ok(())
///     })
/// })
/// .await?;
/// ```
pub async fn in_transaction<T, F>(pool: &PgPool, f: F) -> Result<T, sqlx::Error>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, sqlx::Error>>,
{
    let mut tx = pool.begin().await?;
    match f(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(error = %err, "Rolling back transaction");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}
