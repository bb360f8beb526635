use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::inference::AnalysisKind,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = match payload {
        Ok(Json(request)) => request.message,
        // No JSON content type means no body to read a message from.
        Err(JsonRejection::MissingJsonContentType(rejection)) => {
            tracing::debug!(%rejection, "chat payload without json content type");
            None
        }
        Err(rejection) => {
            tracing::error!(%rejection, "unreadable chat payload");
            return Err(AppError::Internal(anyhow::Error::new(rejection)));
        }
    };

    // Forwarded as typed; only the empty string is refused.
    let message = message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::MissingInput("Message is required".to_string()))?;

    let reply = state
        .inference
        .analyze(&message, AnalysisKind::Chat)
        .await
        .inspect_err(|err| tracing::error!(error = %err, "chat relay failed"))?;

    Ok(Json(ChatResponse { response: reply }))
}
