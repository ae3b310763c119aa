// src/services/prompts.rs
//
// The prompt table: one fixed system instruction per operation, plus the
// builders that turn a request into the message list sent to the provider.
// Handlers go through these builders so the instruction strings live in
// exactly one place.

use crate::message::{ChatTurn, Message, Role};

/// Template operations that take a single block of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    Summarize,
    Paraphrase,
    Rewrite,
    Define,
}

impl Transform {
    pub fn instruction(self) -> &'static str {
        match self {
            Transform::Summarize => {
                "Summarize the following text concisely. Your summary must be shorter \
                 than the original text, include all key points and main ideas, use \
                 simple and direct language, and maintain logical flow. Omit minor \
                 details unless crucial to understanding. Provide only the summary \
                 without additional commentary."
            }
            Transform::Paraphrase => {
                "Paraphrase the following text by rewriting it using different words \
                 and sentence structures while preserving the exact same meaning. \
                 Keep the length similar to the original. Provide only the \
                 paraphrased text without additional commentary."
            }
            Transform::Rewrite => {
                "Rewrite the following text to improve clarity, flow, and readability \
                 while maintaining the core message. Use simpler language where \
                 appropriate and ensure the text is engaging. Provide only the \
                 rewritten text without additional commentary."
            }
            Transform::Define => {
                "Define the following term or phrase clearly and concisely. If it's a \
                 single word, provide the meaning and 2-3 synonyms. If it's a phrase, \
                 explain what it means in simple terms. Keep the explanation brief \
                 and easy to understand. Provide only the definition without \
                 additional commentary."
            }
        }
    }
}

/// Assistant persona for the chat endpoint.
const CHAT_INSTRUCTION: &str =
    "You are a helpful assistant. Be clear and direct, and make sure your \
     answers are correct.";

/// How many prior turns of chat history are forwarded to the provider.
const HISTORY_LIMIT: usize = 20;

/// Messages for a template operation: the fixed instruction followed by the
/// user text. Empty text is forwarded as-is.
pub fn transform_messages(op: Transform, text: &str) -> Vec<Message> {
    vec![Message::system(op.instruction()), Message::user(text)]
}

pub fn translate_messages(text: &str, target_language: &str) -> Vec<Message> {
    let instruction = format!(
        "Translate the following text to {target_language}. Preserve the \
         original meaning and tone. Provide only the translation without \
         additional commentary."
    );
    vec![Message::system(instruction), Message::user(text)]
}

/// Messages for the chat endpoint: assistant persona (with the selected page
/// text as a labeled context block when present), then the tail of the
/// filtered history in original order.
pub fn chat_messages(turns: &[ChatTurn], selected_text: Option<&str>) -> Vec<Message> {
    let mut system = CHAT_INSTRUCTION.to_string();
    if let Some(selected) = selected_text.map(str::trim).filter(|s| !s.is_empty()) {
        system.push_str("\n\nThe user has selected the following text on the page:\n");
        system.push_str(selected);
    }

    let history: Vec<Message> = turns.iter().filter_map(valid_turn).collect();
    let tail = history.len().saturating_sub(HISTORY_LIMIT);

    let mut messages = Vec::with_capacity(history.len() - tail + 1);
    messages.push(Message::system(system));
    messages.extend(history.into_iter().skip(tail));
    messages
}

// A turn survives only with a recognized role and non-blank content.
fn valid_turn(turn: &ChatTurn) -> Option<Message> {
    let role = Role::parse(turn.role.as_deref().unwrap_or_default())?;
    let content = turn.content.as_deref().unwrap_or_default();
    if content.trim().is_empty() {
        return None;
    }
    Some(Message { role, content: content.to_string() })
}
