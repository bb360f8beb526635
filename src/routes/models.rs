use axum::Json;

use crate::services::models::{ModelCatalog, catalog};

pub async fn models_handler() -> Json<ModelCatalog> {
    Json(catalog())
}
