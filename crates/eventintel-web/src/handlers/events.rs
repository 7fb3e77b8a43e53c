//! Event discovery endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use eventintel_common::{DiscoverEventsRequest, EventsEnvelope};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::SharedState;

/// POST /api/discover-events
///
/// Source failures are reported as a `success: false` envelope with HTTP 200.
pub async fn discover_events(
    State(state): State<SharedState>,
    payload: Result<Json<DiscoverEventsRequest>, JsonRejection>,
) -> Result<Json<EventsEnvelope>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    info!(
        location = %req.location,
        start = %req.start_date,
        end = %req.end_date,
        categories = ?req.categories,
        max_results = req.max_results,
        source = state.events.name(),
        "Discovering events"
    );

    let envelope = match state.events.discover(&req).await {
        Ok(batch) => EventsEnvelope::truncated(
            batch.records,
            req.max_results as usize,
            batch.api_calls_used,
        ),
        Err(e) => {
            warn!("Event discovery failed: {e}");
            EventsEnvelope::failure(e.to_string())
        }
    };

    info!(
        success = envelope.success,
        total = envelope.total_events,
        returned = envelope.events.len(),
        "Event discovery finished"
    );
    Ok(Json(envelope))
}
