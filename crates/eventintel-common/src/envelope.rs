//! The uniform success/failure wrapper returned by both discovery endpoints.
//!
//! A failure envelope always carries an empty record list and zero counts;
//! `total_*` on success is the number of records produced before the list
//! was truncated to the caller's `max_results`.

use serde::{Deserialize, Serialize};

use crate::records::{AttendeeRecord, EventRecord};

pub const SERVICE_NAME: &str = "Event Intelligence Platform";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self { status: "healthy".to_string(), service: SERVICE_NAME.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub total_events: usize,
    #[serde(default)]
    pub api_calls_used: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EventsEnvelope {
    /// Builds a success envelope, truncating `events` to `max_results`.
    pub fn truncated(mut events: Vec<EventRecord>, max_results: usize, api_calls_used: u32) -> Self {
        let total_events = events.len();
        events.truncate(max_results);
        Self { success: true, events, total_events, api_calls_used, error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            events: Vec::new(),
            total_events: 0,
            api_calls_used: 0,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendeesEnvelope {
    pub success: bool,
    #[serde(default)]
    pub attendees: Vec<AttendeeRecord>,
    #[serde(default)]
    pub total_attendees: usize,
    #[serde(default)]
    pub api_calls_used: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AttendeesEnvelope {
    pub fn truncated(
        mut attendees: Vec<AttendeeRecord>,
        max_results: usize,
        api_calls_used: u32,
    ) -> Self {
        let total_attendees = attendees.len();
        attendees.truncate(max_results);
        Self { success: true, attendees, total_attendees, api_calls_used, error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            attendees: Vec::new(),
            total_attendees: 0,
            api_calls_used: 0,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Category;
    use pretty_assertions::assert_eq;

    fn event(name: &str) -> EventRecord {
        EventRecord::new(name, "January 1, 2024", "Hall", "Austin", Category::Technology, 0.9)
    }

    #[test]
    fn test_truncation_keeps_pre_truncation_total() {
        let env = EventsEnvelope::truncated(vec![event("a"), event("b")], 1, 1);
        assert!(env.success);
        assert_eq!(env.total_events, 2);
        assert_eq!(env.events.len(), 1);
        assert_eq!(env.events[0].event_name, "a");
    }

    #[test]
    fn test_truncation_beyond_len_is_noop() {
        let env = EventsEnvelope::truncated(vec![event("a")], 10, 1);
        assert_eq!(env.events.len(), 1);
        assert_eq!(env.total_events, 1);
    }

    #[test]
    fn test_failure_carries_no_records() {
        let env = AttendeesEnvelope::failure("boom");
        assert!(!env.success);
        assert!(env.attendees.is_empty());
        assert_eq!(env.total_attendees, 0);
        assert_eq!(env.api_calls_used, 0);
        assert_eq!(env.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_failure_wire_shape() {
        let json = serde_json::to_value(EventsEnvelope::failure("boom")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "events": [],
                "total_events": 0,
                "api_calls_used": 0,
                "error": "boom"
            })
        );
    }

    #[test]
    fn test_success_omits_error_field() {
        let json = serde_json::to_value(EventsEnvelope::truncated(vec![], 5, 1)).unwrap();
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_health_is_healthy() {
        assert_eq!(HealthStatus::healthy().status, "healthy");
    }
}
