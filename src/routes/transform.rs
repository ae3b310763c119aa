// src/routes/transform.rs
use axum::{Json, extract::State};

use crate::error::AppError;
use crate::message::{TextRequest, TextResponse, TranslateRequest, TranslateResponse};
use crate::services::prompts::{self, Transform};
use crate::state::SharedState;

const DEFAULT_TARGET_LANGUAGE: &str = "Spanish";

// All four template endpoints funnel through here; only the instruction
// differs. Missing text is treated as empty input, not an error.
async fn run_transform(
    op: Transform,
    state: SharedState,
    payload: TextRequest,
) -> Result<Json<TextResponse>, AppError> {
    let text = payload.text.unwrap_or_default();
    let messages = prompts::transform_messages(op, &text);
    let result = state.completion.complete(&messages).await?;
    Ok(Json(TextResponse { result }))
}

pub async fn summarize(
    State(state): State<SharedState>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<TextResponse>, AppError> {
    run_transform(Transform::Summarize, state, payload).await
}

pub async fn paraphrase(
    State(state): State<SharedState>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<TextResponse>, AppError> {
    run_transform(Transform::Paraphrase, state, payload).await
}

pub async fn rewrite(
    State(state): State<SharedState>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<TextResponse>, AppError> {
    run_transform(Transform::Rewrite, state, payload).await
}

pub async fn define(
    State(state): State<SharedState>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<TextResponse>, AppError> {
    run_transform(Transform::Define, state, payload).await
}

pub async fn translate(
    State(state): State<SharedState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    let text = payload.text.unwrap_or_default();
    let target_language = payload
        .target_language
        .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string());

    let messages = prompts::translate_messages(&text, &target_language);
    let result = state.completion.complete(&messages).await?;
    Ok(Json(TranslateResponse { result, target_language }))
}
