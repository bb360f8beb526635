// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::inference::InferenceError;

pub const DOWNSTREAM_FAILURE: &str = "Failed to process request";
pub const INTERNAL_FAILURE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingInput(String),

    #[error("Failed to process request: {0}")]
    Downstream(#[from] InferenceError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::MissingInput(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Downstream(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                DOWNSTREAM_FAILURE.to_string(),
                Some(err.to_string()),
            ),
            // Internal faults never leak details to the caller.
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_FAILURE.to_string(),
                None,
            ),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
