//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{any, get, post},
};
use tower_http::{
    services::{ServeDir, ServeFile},
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    attendees::discover_attendees,
    events::discover_events,
    system::{api_not_found, health},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let frontend = state.frontend_dir.clone();
    let index = state.index_document();
    let shared: SharedState = Arc::new(state);

    let api = Router::new()
        .route("/health",             get(health))
        .route("/discover-events",    post(discover_events))
        .route("/discover-attendees", post(discover_attendees))
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        // The nest covers `/api` and `/api/{*rest}` but not the bare trailing slash
        .route("/api/", any(api_not_found))

        // Static files
        .nest_service("/static", ServeDir::new(&frontend))

        // Existing files are served as-is; everything else gets the SPA entry document
        .fallback_service(ServeDir::new(&frontend).fallback(ServeFile::new(index)))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
