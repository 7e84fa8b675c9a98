//! Route definitions for catalog items and their usage.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{catalog, usage};
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> put
/// PUT    /{id}/hidden         -> set_hidden
/// GET    /{id}/usage          -> usage::history
/// POST   /{id}/usage          -> usage::record
/// PUT    /{id}/usage/note     -> usage::set_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list).post(catalog::create))
        .route("/{id}", get(catalog::get_by_id).put(catalog::put))
        .route("/{id}/hidden", put(catalog::set_hidden))
        .route("/{id}/usage", get(usage::history).post(usage::record))
        .route("/{id}/usage/note", put(usage::set_note))
}
