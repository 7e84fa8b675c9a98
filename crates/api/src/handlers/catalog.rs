//! Handlers for the `/catalog` resource.
//!
//! Catalog items are created and edited through a single upsert: every
//! write supplies the full set of user fields.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gorgina_core::catalog::{normalize_id, normalize_text, parse_price, PriceInput};
use gorgina_core::error::CoreError;
use gorgina_core::search::normalize_query;
use gorgina_core::types::new_id;
use gorgina_db::models::catalog::PutCatalogItem;
use gorgina_db::repositories::CatalogRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating or replacing a catalog item.
///
/// Text fields are trimmed; blank or missing fields are stored as null.
#[derive(Debug, Default, Deserialize)]
pub struct PutCatalogRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub pattern: Option<String>,
    pub price: Option<PriceInput>,
}

impl PutCatalogRequest {
    /// Validate and normalize into a repository DTO with the given id.
    fn into_item(self, id: String) -> Result<PutCatalogItem, CoreError> {
        let price = parse_price(self.price.as_ref())?;
        Ok(PutCatalogItem {
            id,
            category: normalize_text(self.category.as_deref()),
            brand: normalize_text(self.brand.as_deref()),
            color: normalize_text(self.color.as_deref()),
            pattern: normalize_text(self.pattern.as_deref()),
            title: normalize_text(self.title.as_deref()),
            description: normalize_text(self.description.as_deref()),
            price,
        })
    }
}

/// Request body for toggling visibility.
#[derive(Debug, Deserialize)]
pub struct SetHiddenRequest {
    pub hidden: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/catalog?search=
///
/// List every item, or only those matching `search`. Hidden items are
/// always included; the client decides how to present them.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let items = match params.search.as_deref().and_then(normalize_query) {
        Some(text) => {
            tracing::debug!(search = %text, "Searching catalog");
            CatalogRepo::search(&state.pool, text).await?
        }
        None => CatalogRepo::list(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/catalog
///
/// Upsert an item. A missing or blank `id` creates a new item with a
/// generated id.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PutCatalogRequest>,
) -> AppResult<impl IntoResponse> {
    let id = normalize_id(input.id.as_deref())?.unwrap_or_else(new_id);
    let item = input.into_item(id)?;
    let saved = CatalogRepo::upsert(&state.pool, &item).await?;
    tracing::info!(id = %saved.id, "Catalog item saved");
    Ok(Json(DataResponse { data: saved }))
}

/// GET /api/v1/catalog/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let item = CatalogRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("CatalogItem", &id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/catalog/{id}
///
/// Upsert an item under the path id. A body `id`, if present, must agree.
pub async fn put(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<PutCatalogRequest>,
) -> AppResult<impl IntoResponse> {
    let id = normalize_id(Some(id.as_str()))?
        .ok_or_else(|| AppError::BadRequest("id must not be blank".into()))?;
    if let Some(body_id) = normalize_id(input.id.as_deref())? {
        if body_id != id {
            return Err(AppError::BadRequest(format!(
                "Body id '{body_id}' does not match path id '{id}'"
            )));
        }
    }
    let item = input.into_item(id)?;
    let saved = CatalogRepo::upsert(&state.pool, &item).await?;
    tracing::info!(id = %saved.id, "Catalog item saved");
    Ok(Json(DataResponse { data: saved }))
}

/// PUT /api/v1/catalog/{id}/hidden
///
/// Hide or unhide an item.
pub async fn set_hidden(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SetHiddenRequest>,
) -> AppResult<impl IntoResponse> {
    let item = CatalogRepo::set_hidden(&state.pool, &id, body.hidden)
        .await?
        .ok_or_else(|| AppError::not_found("CatalogItem", &id))?;
    tracing::info!(id = %item.id, hidden = item.hidden, "Catalog item visibility changed");
    Ok(Json(DataResponse { data: item }))
}
