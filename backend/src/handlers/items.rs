use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use item_types::{Item, ItemPayload, MessageResponse};

use crate::error::ApiError;
use crate::AppState;

pub async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(payload) = payload?;
    let item = state
        .items
        .create(payload)
        .await
        .map_err(ApiError::write_failure)?;
    tracing::debug!(id = %item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state
        .items
        .find_all()
        .await
        .map_err(ApiError::read_failure)?;
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    state
        .items
        .find_by_id(&id)
        .await
        .map_err(ApiError::read_failure)?
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(payload) = payload?;
    state
        .items
        .update_by_id(&id, payload)
        .await
        .map_err(ApiError::write_failure)?
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state
        .items
        .delete_by_id(&id)
        .await
        .map_err(ApiError::read_failure)?;
    if !deleted {
        return Err(ApiError::not_found());
    }
    tracing::debug!(%id, "item deleted");
    Ok(Json(MessageResponse::new("Item deleted")))
}
