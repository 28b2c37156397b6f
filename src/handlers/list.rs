use crate::codec;
use crate::error::ApiError;
use crate::models::Item;
use crate::response::ItemResponse;
use crate::routes;
use crate::state::AppState;
use crate::store::ItemStore;
use axum::extract::State;

/// ReadAll: every item in the table, in scan order
///
/// Records that do not decode as items are skipped and logged rather than
/// failing the whole listing.
pub async fn list_items(store: &dyn ItemStore) -> Result<ItemResponse, ApiError> {
    let records = store.scan_table().await?;
    let scanned = records.len();

    let items: Vec<Item> = records
        .iter()
        .filter_map(|record| match codec::from_record(record) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!("Skipping malformed record: {}", err);
                None
            }
        })
        .collect();

    tracing::info!(
        "Listed {} items ({} skipped)",
        items.len(),
        scanned - items.len()
    );

    ItemResponse::json(&items)
}

/// GET /items handler - List all items
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items in the table", body = Vec<Item>),
        (status = 500, description = "Store error", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn list_handler(State(state): State<AppState>) -> Result<ItemResponse, ApiError> {
    list_items(state.store.as_ref()).await
}
