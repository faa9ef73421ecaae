//! Item CRUD handlers.
//!
//! Handlers talk to the store through the repository trait object on
//! [`AppState`]. Payload shape validation (required fields, types) is the
//! JSON extractor's job; its rejection surfaces as a 422 response.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use stockroom_core::item::Item;
use stockroom_core::store::StoreError;

use crate::{handlers::ApiError, state::AppState};

/// Query parameters for listing items.
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    /// Filter by stock flag; absent means all items.
    pub in_stock: Option<bool>,
}

/// List items (GET /items).
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.list_items(query.in_stock).await?;

    Ok(Json(items))
}

/// Get a single item by id (GET /items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, ApiError> {
    let item = state.items.get_item(id).await?;

    match item {
        Some(item) => Ok(Json(item)),
        None => Err(StoreError::NotFound { id }.into()),
    }
}

/// Create a new item (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(item) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    tracing::debug!(payload = ?item, "Received create item request");

    let created = state.items.create_item(item).await?;

    tracing::info!(item_id = ?created.id, name = %created.name, "Created new item");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an item by id (PUT /items/{id}).
///
/// Full replacement semantics: fields omitted from the payload take
/// their defaults, and the path id wins over any id in the payload.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(replacement) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    tracing::debug!(item_id = %id, payload = ?replacement, "Received update item request");

    let updated = state.items.update_item(id, replacement).await?;

    tracing::info!(item_id = %id, "Updated item");

    Ok(Json(updated))
}

/// Delete an item by id (DELETE /items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.items.delete_item(id).await?;

    tracing::info!(item_id = %id, "Deleted item");

    Ok(Json(serde_json::json!({
        "message": format!("Item {id} supprimé avec succès"),
    })))
}
