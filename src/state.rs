// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::CompletionClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub completion: CompletionClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            completion: CompletionClient::new(config),
        }
    }
}
