//! Response bodies shared by all resources.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned whenever a row, or a row an order refers to, is missing.
pub const NOT_FOUND_MESSAGE: &str = "content not found in database";

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(text: impl Into<String>) -> Json<MessageBody> {
    Json(MessageBody {
        message: text.into(),
    })
}

/// The fixed 404 payload: `{"message": "content not found in database"}`.
pub fn not_found() -> (StatusCode, Json<MessageBody>) {
    (StatusCode::NOT_FOUND, message(NOT_FOUND_MESSAGE))
}
