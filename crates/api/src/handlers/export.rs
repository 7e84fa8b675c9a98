//! CSV exports of the full catalog and usage history.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use gorgina_core::export::{activity_csv, catalog_csv};
use gorgina_db::repositories::{CatalogRepo, UsageRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /data/catalog.csv
pub async fn catalog(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CatalogRepo::list(&state.pool).await?;
    let csv = catalog_csv(items.iter().map(|i| i.export_row()));
    tracing::debug!(rows = items.len(), "Exported catalog");
    Ok(csv_response("catalog.csv", csv))
}

/// GET /data/activity.csv
pub async fn activity(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = UsageRepo::list(&state.pool).await?;
    let csv = activity_csv(events.iter().map(|e| e.export_row()));
    tracing::debug!(rows = events.len(), "Exported activity");
    Ok(csv_response("activity.csv", csv))
}

fn csv_response(filename: &str, body: String) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
}
