use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::{UiEvent, UiState};
use crate::message::{ChatRequest, ChatResponse, ErrorBody};

/// Failure of a chat round trip. `Display` is the text shown after `"Error: "`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The relay answered with a JSON error body.
    #[error("{error}")]
    Server { status: StatusCode, error: String },

    #[error("Request failed with status code {}", .0.as_u16())]
    Status(StatusCode),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    base_url: String,
}

impl ChatClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn send(&self, message: &str) -> Result<String, ClientError> {
        let url = format!("{}/api/chat", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&ChatRequest::new(message))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: ChatResponse = response.json().await?;
            return Ok(body.response);
        }

        // An empty `error` is as good as no body at all.
        match response.json::<ErrorBody>().await {
            Ok(body) if !body.error.is_empty() => Err(ClientError::Server {
                status,
                error: body.error,
            }),
            _ => Err(ClientError::Status(status)),
        }
    }

    /// Runs one submit: guard, request, then the reply or failure transition.
    pub async fn submit(&self, state: UiState) -> UiState {
        let Some(message) = state.outgoing_message().map(str::to_owned) else {
            return state;
        };

        let state = state.reduce(UiEvent::SubmitStarted);
        let outcome = match self.send(&message).await {
            Ok(reply) => UiEvent::ReplyReceived(reply),
            Err(err) => {
                tracing::warn!(error = %err, "chat request failed");
                UiEvent::RequestFailed(err.to_string())
            }
        };

        state.reduce(outcome)
    }
}
