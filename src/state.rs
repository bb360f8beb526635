// src/state.rs
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::services::inference::InferenceClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: RelayConfig,
    pub inference: InferenceClient,
}

impl AppState {
    pub fn new(config: RelayConfig) -> reqwest::Result<Self> {
        let inference = InferenceClient::new(&config.ai_service_url, config.ai_service_timeout)?;
        Ok(Self { config, inference })
    }
}
