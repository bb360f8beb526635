//! Client for the external inference service.
//!
//! The service exposes `POST /analyze`, taking `{ "text", "type" }` and
//! answering `{ "result" }`. Every failure mode collapses into an
//! [`InferenceError`]; no retries are attempted.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Chat,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("Request failed with status code {}", .0.as_u16())]
    Status(StatusCode),

    #[error("Invalid response from inference service: {0}")]
    Decode(reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
}

impl InferenceClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `text` for analysis and returns the service's `result` verbatim.
    pub async fn analyze(&self, text: &str, kind: AnalysisKind) -> Result<String, InferenceError> {
        let url = format!("{}/analyze", self.base_url);
        let body = AnalyzeRequest {
            text: text.to_string(),
            kind,
        };

        tracing::debug!(%url, ?kind, "forwarding to inference service");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(InferenceError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferenceError::Status(status));
        }

        let payload: AnalyzeResponse = response.json().await.map_err(|e| {
            // A timeout while reading the body is still a transport problem.
            if e.is_timeout() {
                InferenceError::Transport(e)
            } else {
                InferenceError::Decode(e)
            }
        })?;

        Ok(payload.result)
    }
}
