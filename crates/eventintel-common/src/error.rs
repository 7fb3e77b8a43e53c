use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventIntelError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Date range is inverted: {start} is after {end}")]
    InvertedRange { start: String, end: String },

    #[error("Upstream source error: {0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, EventIntelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_names_the_value() {
        let source = chrono::NaiveDate::parse_from_str("2024-13-01", "%Y-%m-%d").unwrap_err();
        let err = EventIntelError::InvalidDate { value: "2024-13-01".into(), source };
        assert!(err.to_string().starts_with("Invalid date '2024-13-01': "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_inverted_range_message() {
        let err = EventIntelError::InvertedRange { start: "2024-02-01".into(), end: "2024-01-01".into() };
        assert_eq!(err.to_string(), "Date range is inverted: 2024-02-01 is after 2024-01-01");
    }
}
