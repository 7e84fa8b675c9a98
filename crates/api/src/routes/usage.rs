//! Route definitions for individual usage events.

use axum::routing::get;
use axum::Router;

use crate::handlers::usage;
use crate::state::AppState;

/// Routes mounted at `/usage`.
///
/// ```text
/// GET    /{id}                -> get_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(usage::get_event))
}
