// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::error::AppError;
use crate::message::{ChatRequest, TextResponse};
use crate::services::prompts;
use crate::state::SharedState;

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let turns = payload.messages.unwrap_or_default();
    let messages = prompts::chat_messages(&turns, payload.selected_text.as_deref());
    let result = state.completion.complete(&messages).await?;
    Ok(Json(TextResponse { result }))
}
