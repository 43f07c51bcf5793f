//! JSON error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lb_core::LbError;
use serde_json::json;
use std::any::Any;

/// User-facing text for any failure the caller cannot fix field by field.
pub const GENERIC_MESSAGE: &str = "Error al procesar la predicción";

/// API error with status code and message. Serialized as `{ "error": <message> }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: msg.into() }
    }
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::UNPROCESSABLE_ENTITY, message: msg.into() }
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: msg.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

/// Response for a handler that panicked.
pub fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    ApiError::internal(GENERIC_MESSAGE).into_response()
}

impl From<LbError> for ApiError {
    fn from(err: LbError) -> Self {
        match &err {
            LbError::Validation { .. } => {
                tracing::info!(error = %err, "rejected prediction input");
                ApiError::unprocessable(err.to_string())
            }
            LbError::MalformedBody(_) => {
                tracing::warn!(error = %err, "malformed prediction request");
                ApiError::bad_request(GENERIC_MESSAGE)
            }
            _ => {
                tracing::error!(error = %err, "prediction failed");
                ApiError::internal(GENERIC_MESSAGE)
            }
        }
    }
}
