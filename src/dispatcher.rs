//! Maps an HTTP verb and optional `id` path parameter onto one item
//! operation.

use http::Method;

use crate::error::ApiError;
use crate::handlers;
use crate::response::ItemResponse;
use crate::store::ItemStore;

/// The operation a request resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    Create,
    ReadAll,
    ReadOne(&'a str),
    Update(&'a str),
    Delete(&'a str),
}

/// Routing decision only; `None` means the method is not served
///
/// POST ignores the path id. GET without an id (or with an empty one)
/// lists the table. PUT and DELETE pass the id through as-is, an absent id
/// becomes the empty string and the store decides what that means.
pub fn route<'a>(method: &Method, id: Option<&'a str>) -> Option<Operation<'a>> {
    let id = id.unwrap_or_default();
    match *method {
        Method::POST => Some(Operation::Create),
        Method::GET if id.is_empty() => Some(Operation::ReadAll),
        Method::GET => Some(Operation::ReadOne(id)),
        Method::PUT => Some(Operation::Update(id)),
        Method::DELETE => Some(Operation::Delete(id)),
        _ => None,
    }
}

/// Route and run a single request against the store
///
/// Always produces a reply: failures are already mapped to their status.
pub async fn dispatch(
    store: &dyn ItemStore,
    method: &Method,
    id: Option<&str>,
    body: &[u8],
) -> ItemResponse {
    let result = match route(method, id) {
        Some(Operation::Create) => handlers::create_item(store, body).await,
        Some(Operation::ReadAll) => handlers::list_items(store).await,
        Some(Operation::ReadOne(id)) => handlers::get_item(store, id).await,
        Some(Operation::Update(id)) => handlers::update_item(store, id, body).await,
        Some(Operation::Delete(id)) => handlers::delete_item(store, id).await,
        None => Err(ApiError::MethodNotAllowed),
    };

    result.unwrap_or_else(ItemResponse::from)
}
