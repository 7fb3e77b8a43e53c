//! Request bodies for the discovery endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{EventIntelError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoverEventsRequest {
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub categories: Vec<String>,
    pub max_results: u32,
}

impl DiscoverEventsRequest {
    /// Checks the constraints that the JSON shape alone cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.location.trim().is_empty() {
            return Err(EventIntelError::InvalidRequest("location must not be empty".into()));
        }
        if self.categories.iter().all(|c| c.trim().is_empty()) {
            return Err(EventIntelError::InvalidRequest(
                "at least one category is required".into(),
            ));
        }
        if self.max_results == 0 {
            return Err(EventIntelError::InvalidRequest("max_results must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoverAttendeesRequest {
    pub event_name: String,
    pub max_results: u32,
}

impl DiscoverAttendeesRequest {
    pub fn validate(&self) -> Result<()> {
        if self.event_name.trim().is_empty() {
            return Err(EventIntelError::InvalidRequest("event_name must not be empty".into()));
        }
        if self.max_results == 0 {
            return Err(EventIntelError::InvalidRequest("max_results must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events_request() -> DiscoverEventsRequest {
        DiscoverEventsRequest {
            location: "Austin".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-02-01".into(),
            categories: vec!["technology".into()],
            max_results: 5,
        }
    }

    #[test]
    fn test_valid_events_request() {
        assert!(events_request().validate().is_ok());
    }

    #[test]
    fn test_blank_location_rejected() {
        let req = DiscoverEventsRequest { location: "   ".into(), ..events_request() };
        assert!(matches!(req.validate(), Err(EventIntelError::InvalidRequest(_))));
    }

    #[test]
    fn test_empty_categories_rejected() {
        let req = DiscoverEventsRequest { categories: vec![], ..events_request() };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let req = DiscoverAttendeesRequest { event_name: "Expo".into(), max_results: 0 };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_max_results_fails_to_parse() {
        let body = r#"{"event_name":"Expo","max_results":-3}"#;
        assert!(serde_json::from_str::<DiscoverAttendeesRequest>(body).is_err());
    }
}
