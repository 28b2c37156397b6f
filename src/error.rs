use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::codec::DecodeError;
use crate::response::ItemResponse;
use crate::store::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "Item not found";

/// Custom error type for item operations
///
/// Every variant maps to exactly one HTTP status. Bodies are plain text
/// carrying the underlying message, except for 405 which has no body.
#[derive(Debug)]
pub enum ApiError {
    /// Request body does not parse into an item
    BadRequest(serde_json::Error),
    /// No record for the requested id
    NotFound,
    /// Store call failed
    Store(StoreError),
    /// Stored record does not have the shape of an item
    Decode(DecodeError),
    /// Response body could not be serialized
    Encode(serde_json::Error),
    /// Verb not served by the item routes
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Decode(_) | ApiError::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<ApiError> for ItemResponse {
    fn from(err: ApiError) -> Self {
        let status = err.status();
        let message = match err {
            ApiError::BadRequest(err) => err.to_string(),
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::Store(err) => err.to_string(),
            ApiError::Decode(err) => err.to_string(),
            ApiError::Encode(err) => err.to_string(),
            ApiError::MethodNotAllowed => {
                tracing::warn!("Rejected request with unsupported method");
                return ItemResponse::empty(status);
            }
        };

        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status, message);
        } else {
            tracing::warn!("Request rejected ({}): {}", status, message);
        }

        ItemResponse::text(status, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ItemResponse::from(self).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        ApiError::Decode(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err)
    }
}
