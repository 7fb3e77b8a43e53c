//! Attendee discovery endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use eventintel_common::{AttendeesEnvelope, DiscoverAttendeesRequest};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::SharedState;

/// POST /api/discover-attendees
pub async fn discover_attendees(
    State(state): State<SharedState>,
    payload: Result<Json<DiscoverAttendeesRequest>, JsonRejection>,
) -> Result<Json<AttendeesEnvelope>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    info!(
        event = %req.event_name,
        max_results = req.max_results,
        source = state.attendees.name(),
        "Discovering attendees"
    );

    let envelope = match state.attendees.discover(&req).await {
        Ok(batch) => AttendeesEnvelope::truncated(
            batch.records,
            req.max_results as usize,
            batch.api_calls_used,
        ),
        Err(e) => {
            warn!("Attendee discovery failed: {e}");
            AttendeesEnvelope::failure(e.to_string())
        }
    };

    info!(
        success = envelope.success,
        total = envelope.total_attendees,
        returned = envelope.attendees.len(),
        "Attendee discovery finished"
    );
    Ok(Json(envelope))
}
