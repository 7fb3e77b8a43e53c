//! Record types returned by the discovery endpoints and held by the client.
//! Every field tolerates being absent or `null`, and an unrecognised category
//! reads as `other`, so partially populated records coming back from a future
//! external source still deserialize. The client renders placeholders for
//! whatever is empty.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Business,
    Music,
    Sports,
    Arts,
    Food,
    Education,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Technology,
        Category::Business,
        Category::Music,
        Category::Sports,
        Category::Arts,
        Category::Food,
        Category::Education,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business   => "business",
            Category::Music      => "music",
            Category::Sports     => "sports",
            Category::Arts       => "arts",
            Category::Food       => "food",
            Category::Education  => "education",
            Category::Other      => "other",
        }
    }

    /// Lenient mapping used for free-form request categories.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_name: String,
    /// Free-form display date, e.g. "January 1, 2024".
    #[serde(default, deserialize_with = "null_as_default")]
    pub exact_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exact_venue: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Category,
    #[serde(default = "default_confidence", deserialize_with = "null_as_confidence")]
    pub confidence_score: f64,
}

fn default_confidence() -> f64 { 0.5 }

fn null_as_confidence<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(de)?.unwrap_or_else(default_confidence))
}

impl EventRecord {
    pub fn new(
        event_name: impl Into<String>,
        exact_date: impl Into<String>,
        exact_venue: impl Into<String>,
        location: impl Into<String>,
        category: Category,
        confidence_score: f64,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            exact_date: exact_date.into(),
            exact_venue: exact_venue.into(),
            location: location.into(),
            category,
            confidence_score: confidence_score.clamp(0.0, 1.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Attendee
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttendeeRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engagement_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub post_content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub post_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub post_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!("Technology".parse::<Category>().unwrap(), Category::Technology);
        assert_eq!(" music ".parse::<Category>().unwrap(), Category::Music);
        assert!("astrology".parse::<Category>().is_err());
    }

    #[test]
    fn test_unknown_label_maps_to_other() {
        assert_eq!(Category::from_label("astrology"), Category::Other);
        assert_eq!(Category::from_label("sports"), Category::Sports);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let e = EventRecord::new("x", "d", "v", "l", Category::Arts, 1.7);
        assert_eq!(e.confidence_score, 1.0);
        let e = EventRecord::new("x", "d", "v", "l", Category::Arts, -0.2);
        assert_eq!(e.confidence_score, 0.0);
    }

    #[test]
    fn test_partial_event_uses_defaults() {
        let e: EventRecord = serde_json::from_str(r#"{"event_name":"Expo"}"#).unwrap();
        assert_eq!(e.category, Category::Other);
        assert_eq!(e.confidence_score, 0.5);
        assert!(e.exact_date.is_empty());
    }

    #[test]
    fn test_unrecognised_category_reads_as_other() {
        let e: EventRecord =
            serde_json::from_str(r#"{"event_name":"Expo","category":"astrology"}"#).unwrap();
        assert_eq!(e.category, Category::Other);
        assert_eq!(e.event_name, "Expo");
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let e: EventRecord = serde_json::from_str(
            r#"{"event_name":null,"exact_date":null,"category":null,"confidence_score":null}"#,
        )
        .unwrap();
        assert!(e.event_name.is_empty());
        assert_eq!(e.category, Category::Other);
        assert_eq!(e.confidence_score, 0.5);

        let a: AttendeeRecord = serde_json::from_str(
            r#"{"username":"@x","post_content":null,"followers_count":null,"verified":null}"#,
        )
        .unwrap();
        assert_eq!(a, AttendeeRecord { username: "@x".into(), ..AttendeeRecord::default() });
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Education).unwrap();
        assert_eq!(json, "\"education\"");
    }
}
