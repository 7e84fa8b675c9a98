pub mod catalog;
pub mod export;
pub mod health;
pub mod usage;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog                                 list (?search=), upsert
/// /catalog/{id}                            get, upsert
/// /catalog/{id}/hidden                     hide / unhide (PUT)
/// /catalog/{id}/usage                      history (GET), record (POST)
/// /catalog/{id}/usage/note                 annotate latest usage (PUT)
///
/// /usage/{id}                              get a usage event
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/usage", usage::router())
}
