use crate::codec;
use crate::error::ApiError;
use crate::models::Item;
use crate::response::ItemResponse;
use crate::routes;
use crate::state::AppState;
use crate::store::ItemStore;
use axum::{body::Bytes, extract::Path, extract::State};

/// Update: full replacement of the record keyed by `id`
///
/// The path id always wins over any id in the body. There is no
/// existence check, so updating an unknown id creates it.
pub async fn update_item(
    store: &dyn ItemStore,
    id: &str,
    body: &[u8],
) -> Result<ItemResponse, ApiError> {
    let mut item = codec::decode_body(body)?;
    item.id = id.to_string();

    store.put_record(codec::to_record(&item)).await?;

    tracing::info!("Updated item with id: {}", item.id);
    ItemResponse::json(&item)
}

/// PUT /items/{id} handler - Replace an item
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item id, overrides any id in the body")
    ),
    request_body = Item,
    responses(
        (status = 200, description = "Item stored", body = Item),
        (status = 400, description = "Body is not a valid item", body = String, content_type = "text/plain"),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<ItemResponse, ApiError> {
    update_item(state.store.as_ref(), &id, &body).await
}
