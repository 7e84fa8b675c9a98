//! Route definitions for CSV exports.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Export routes, mounted at the root.
///
/// ```text
/// GET    /data/catalog.csv    -> catalog
/// GET    /data/activity.csv   -> activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/data/catalog.csv", get(export::catalog))
        .route("/data/activity.csv", get(export::activity))
}
