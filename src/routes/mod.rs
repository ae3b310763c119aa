// src/routes/mod.rs
pub mod chat;
pub mod transform;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/summarize", post(transform::summarize))
        .route("/paraphrase", post(transform::paraphrase))
        .route("/rewrite", post(transform::rewrite))
        .route("/define", post(transform::define))
        .route("/translate", post(transform::translate))
        .route("/chat", post(chat::chat_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
