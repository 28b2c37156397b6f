use crate::error::ApiError;
use crate::response::ItemResponse;
use crate::routes;
use crate::state::AppState;
use crate::store::ItemStore;
use axum::{extract::Path, extract::State};
use http::StatusCode;

/// Delete: remove the record keyed by `id`
///
/// Deleting an absent id succeeds the same way as deleting a present one.
pub async fn delete_item(store: &dyn ItemStore, id: &str) -> Result<ItemResponse, ApiError> {
    store.delete_record(id).await?;

    tracing::info!("Deleted item with id: {}", id);
    Ok(ItemResponse::text(
        StatusCode::OK,
        format!("Deleted item {}", id),
    ))
}

/// DELETE /items/{id} handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item removed (or was already absent)", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ItemResponse, ApiError> {
    delete_item(state.store.as_ref(), &id).await
}
