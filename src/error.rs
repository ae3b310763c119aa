// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::services::completion::CompletionError;

/// Handler-level error. Every route reports failures the same way: a 500
/// with a JSON `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(error = %self, "request failed");
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
