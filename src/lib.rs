//! Single-page caption generator.
//!
//! Serves a form that posts a prompt to a captioning backend and renders the
//! returned text as headings, bullet lists and paragraphs. The same router
//! also carries a Gemini-backed `/generate-caption/` endpoint that the page
//! uses by default.

pub mod api;
pub mod client;
pub mod config;
pub mod formatter;
pub mod gemini;
pub mod render;
pub mod shell;

use std::sync::Arc;

use axum::Router;

pub use client::{CaptionClient, ClientError};
pub use config::{AppConfig, ConfigError, GeminiSettings};
pub use formatter::{format_caption, Block};
pub use gemini::{GeminiClient, GeminiError};
pub use shell::{PageState, Shell, SubmitRejection};

pub struct AppState {
    pub shell: Shell,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(caption_backend_url: impl Into<String>, gemini: GeminiSettings) -> Self {
        Self {
            shell: Shell::new(CaptionClient::new(caption_backend_url)),
            gemini: GeminiClient::new(gemini),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.caption_backend_url.clone(), config.gemini.clone())
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "caption page listening");
    axum::serve(listener, app).await
}
