//! Health check and the `/api/*` not-found fallback.

use axum::{http::Uri, Json};
use eventintel_common::HealthStatus;
use tracing::debug;

use crate::error::ApiError;

/// GET /api/health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

/// Any unmatched `/api/*` path. Kept out of the SPA fallback so API typos
/// surface as 404s instead of returning the entry document.
pub async fn api_not_found(uri: Uri) -> ApiError {
    debug!("No API route for {}", uri.path());
    ApiError::NotFound
}
