use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::protocol::{CreateItemRequest, MessageResponse, UpdateItemRequest};
use super::store::{ItemError, ItemStore};
use super::types::Item;

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let status = match self {
            ItemError::NotFound => StatusCode::NOT_FOUND,
            ItemError::MissingName => StatusCode::BAD_REQUEST,
        };
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

pub async fn handle_list_items(Extension(store): Extension<Arc<ItemStore>>) -> Json<Vec<Item>> {
    Json(store.list().await)
}

pub async fn handle_get_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, ItemError> {
    match store.get(id).await {
        Ok(item) => Ok(Json(item)),
        Err(e) => {
            tracing::debug!("Get failed for item {}: {}", id, e);
            Err(e)
        }
    }
}

pub async fn handle_create_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ItemError> {
    match store.create(req.name).await {
        Ok(item) => Ok((StatusCode::CREATED, Json(item))),
        Err(e) => {
            tracing::debug!("Create rejected: {}", e);
            Err(e)
        }
    }
}

pub async fn handle_update_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<Item>, ItemError> {
    match store.update(id, req.name).await {
        Ok(item) => Ok(Json(item)),
        Err(e) => {
            tracing::debug!("Update failed for item {}: {}", id, e);
            Err(e)
        }
    }
}

pub async fn handle_delete_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, ItemError> {
    match store.delete(id).await {
        Ok(_) => Ok(Json(MessageResponse::new("Item deleted successfully"))),
        Err(e) => {
            tracing::debug!("Delete failed for item {}: {}", id, e);
            Err(e)
        }
    }
}
