use axum::response::{IntoResponse, Response};
use http::{StatusCode, header};
use serde::Serialize;

use crate::error::ApiError;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Empty,
    Json(String),
    Text(String),
}

impl ResponseBody {
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            ResponseBody::Empty => None,
            ResponseBody::Json(_) => Some(JSON_CONTENT_TYPE),
            ResponseBody::Text(_) => Some(TEXT_CONTENT_TYPE),
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ResponseBody::Empty => String::new(),
            ResponseBody::Json(body) | ResponseBody::Text(body) => body,
        }
    }
}

/// Transport-neutral reply produced by every item operation
///
/// The axum server turns it into a response through `IntoResponse`, the
/// Lambda adapter into the gateway response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ItemResponse {
    /// 200 with a JSON-serialized body
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(value).map_err(ApiError::Encode)?;
        Ok(Self {
            status: StatusCode::OK,
            body: ResponseBody::Json(body),
        })
    }

    pub fn text(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Text(message.into()),
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            body: ResponseBody::Empty,
        }
    }
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        match self.body {
            ResponseBody::Empty => self.status.into_response(),
            ResponseBody::Json(body) => {
                (self.status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response()
            }
            ResponseBody::Text(body) => {
                (self.status, [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], body).into_response()
            }
        }
    }
}
