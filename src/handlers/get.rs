use crate::codec;
use crate::error::ApiError;
use crate::models::Item;
use crate::response::ItemResponse;
use crate::routes;
use crate::state::AppState;
use crate::store::ItemStore;
use axum::{extract::Path, extract::State};

/// ReadOne: look up a single item by id
pub async fn get_item(store: &dyn ItemStore, id: &str) -> Result<ItemResponse, ApiError> {
    match store.get_record(id).await? {
        Some(record) => {
            let item = codec::from_record(&record)?;
            tracing::info!("Successfully retrieved item with id: {}", id);
            ItemResponse::json(&item)
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}

/// GET /items/{id} handler - Retrieve an item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ItemResponse, ApiError> {
    get_item(state.store.as_ref(), &id).await
}
