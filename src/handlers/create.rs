use crate::codec;
use crate::error::ApiError;
use crate::models::Item;
use crate::response::ItemResponse;
use crate::routes;
use crate::state::AppState;
use crate::store::ItemStore;
use axum::{body::Bytes, extract::State};

/// Create: decode the body and upsert it unconditionally
///
/// An existing record with the same id is overwritten.
pub async fn create_item(store: &dyn ItemStore, body: &[u8]) -> Result<ItemResponse, ApiError> {
    let item = codec::decode_body(body)?;

    store.put_record(codec::to_record(&item)).await?;

    tracing::info!("Created item with id: {}", item.id);
    ItemResponse::json(&item)
}

/// POST /items handler - Store an item
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = Item,
    responses(
        (status = 200, description = "Item stored", body = Item),
        (status = 400, description = "Body is not a valid item", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ItemResponse, ApiError> {
    create_item(state.store.as_ref(), &body).await
}
