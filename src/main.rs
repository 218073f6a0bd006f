use std::error::Error;
use std::sync::Arc;

use caption_page::{build_app, run_server, AppConfig, AppState};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,caption_page=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();
    init_logging();

    let config = AppConfig::from_env()?;
    if config.gemini.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; /generate-caption/ will answer 502");
    }
    tracing::info!(
        backend = %config.caption_backend_url,
        model = %config.gemini.model,
        "starting caption page"
    );

    let app = build_app(Arc::new(AppState::from_config(&config)));
    run_server(app, config.port).await?;
    Ok(())
}
