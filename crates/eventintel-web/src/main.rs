//! Event Intelligence Web Server
//!
//! Run with: cargo run -p eventintel-web

use eventintel_config::{Config, SourceMode};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("eventintel_web=debug,info")),
        )
        .init();

    info!("Starting Event Intelligence Web Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    match config.mode() {
        SourceMode::Mock => info!("API credentials incomplete; serving mock records"),
        SourceMode::Live => warn!("API credentials found but no live sources are built in; serving mock records"),
    }

    if !config.server.frontend_dir.join("index.html").is_file() {
        warn!(
            "No index.html under {}; the SPA fallback will return 404",
            config.server.frontend_dir.display()
        );
    }

    let state = eventintel_web::state::AppState::with_mock_sources(config.server.frontend_dir.clone());
    let app = eventintel_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!("Server listening on http://{}", config.server.bind);
    info!("   Frontend:  {}", config.server.frontend_dir.display());
    info!("   Health:    http://localhost:8000/api/health");

    axum::serve(listener, app).await?;

    Ok(())
}
