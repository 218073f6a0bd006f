mod handlers;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use handlers::{generate, generate_caption, health, index, not_found};
pub use models::{CaptionRequest, CaptionResponse, ErrorResponse, GenerateForm, HealthResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/generate-caption/", post(generate_caption))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}
