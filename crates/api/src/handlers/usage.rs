//! Handlers for usage events: marking an item used, annotating the latest
//! use, and reading history.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gorgina_core::catalog::normalize_note;
use gorgina_db::repositories::{CatalogRepo, UsageRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for annotating the latest usage. A null or blank note
/// clears it.
#[derive(Debug, Deserialize)]
pub struct SetNoteRequest {
    pub note: Option<String>,
}

/// POST /api/v1/catalog/{id}/usage
///
/// Record that the item was used now. Returns the new event together with
/// the item's refreshed state.
pub async fn record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let recorded = UsageRepo::record(&state.pool, &id)
        .await
        .map_err(|e| AppError::from_lookup(e, "CatalogItem", &id))?;
    tracing::info!(cid = %id, event_id = %recorded.event.id, "Usage recorded");
    Ok((StatusCode::CREATED, Json(DataResponse { data: recorded })))
}

/// GET /api/v1/catalog/{id}/usage
///
/// Usage history of one item, newest first.
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    CatalogRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("CatalogItem", &id))?;
    let events = UsageRepo::list_for_item(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: events }))
}

/// PUT /api/v1/catalog/{id}/usage/note
///
/// Set the note on the item's most recent usage event.
pub async fn set_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SetNoteRequest>,
) -> AppResult<impl IntoResponse> {
    let note = normalize_note(body.note.as_deref());
    let event = UsageRepo::set_latest_note(&state.pool, &id, note.as_deref())
        .await
        .map_err(|e| AppError::from_lookup(e, "UsageEvent for CatalogItem", &id))?;
    tracing::debug!(cid = %id, event_id = %event.id, "Usage note updated");
    Ok(Json(DataResponse { data: event }))
}

/// GET /api/v1/usage/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event = UsageRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("UsageEvent", &id))?;
    Ok(Json(DataResponse { data: event }))
}
