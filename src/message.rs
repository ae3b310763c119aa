// src/message.rs
use serde::{Deserialize, Serialize};

/// Roles accepted on the completion wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Parse a raw role string from a chat request. Anything outside the
    /// three recognized values is rejected so the caller can drop the turn.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "system" => Some(Role::System),
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One role-tagged message as sent to the completion provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Raw inbound chat turn. Fields default to empty instead of failing
/// deserialization; invalid turns are filtered out, never rejected.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatTurn {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Option<Vec<ChatTurn>>,
    #[serde(default)]
    pub selected_text: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct TextResponse {
    pub result: String,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub result: String,
    pub target_language: String,
}
