// src/routes/mod.rs
pub mod chat;
pub mod models;

use std::any::Any;
use std::path::Path;

use crate::error::AppError;
use crate::message::HealthStatus;
use crate::state::SharedState;
use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::chat_handler;
use models::models_handler;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/models", get(models_handler));

    let router = Router::new()
        .route("/", get(health_handler))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(static_dir));

    with_fault_boundary(router)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

/// Wraps every route of `router` so a panicking handler answers with a generic 500.
pub fn with_fault_boundary<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "request handler panicked");
    AppError::Internal(anyhow::anyhow!(detail)).into_response()
}

pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
