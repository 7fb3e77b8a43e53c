//! Record sources behind the discovery endpoints.
//!
//! Sources:
//!   MockEventSource     — templated events parameterized by location
//!   MockAttendeeSource  — templated social posts parameterized by event name
//!
//! A search-API or social-API backed source implements the same trait and
//! is swapped in through `AppState`; the envelope shape does not change.

use async_trait::async_trait;
use chrono::{Days, NaiveDate};

use eventintel_common::error::{EventIntelError, Result};
use eventintel_common::{
    AttendeeRecord, Category, DiscoverAttendeesRequest, DiscoverEventsRequest, EventRecord,
};

/// Records produced by one discovery call, before truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBatch<T> {
    pub records: Vec<T>,
    pub api_calls_used: u32,
}

#[async_trait]
pub trait EventSource: Send + Sync {
    async fn discover(&self, req: &DiscoverEventsRequest) -> Result<SourceBatch<EventRecord>>;
    fn name(&self) -> &str;
}

#[async_trait]
pub trait AttendeeSource: Send + Sync {
    async fn discover(&self, req: &DiscoverAttendeesRequest)
        -> Result<SourceBatch<AttendeeRecord>>;
    fn name(&self) -> &str;
}

// ── Dates ─────────────────────────────────────────────────────────────────────

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const DATE_DISPLAY_FORMAT: &str = "%B %-d, %Y";

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).map_err(|source| {
        EventIntelError::InvalidDate { value: value.to_string(), source }
    })
}

fn display_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

// ── Mock events ───────────────────────────────────────────────────────────────

pub struct MockEventSource;

#[async_trait]
impl EventSource for MockEventSource {
    async fn discover(&self, req: &DiscoverEventsRequest) -> Result<SourceBatch<EventRecord>> {
        let start = parse_date(&req.start_date)?;
        let end = parse_date(&req.end_date)?;
        if end < start {
            return Err(EventIntelError::InvertedRange {
                start: req.start_date.clone(),
                end: req.end_date.clone(),
            });
        }

        let location = req.location.trim();
        let mut categories = req
            .categories
            .iter()
            .filter(|c| !c.trim().is_empty())
            .map(|c| Category::from_label(c));
        let first = categories.next().unwrap_or_default();
        let second = categories.next().unwrap_or(first);

        let festival_day = start
            .checked_add_days(Days::new(7))
            .map_or(end, |d| d.min(end));

        let records = vec![
            EventRecord::new(
                format!("{location} Tech Summit"),
                display_date(start),
                format!("{location} Convention Center"),
                location,
                first,
                0.92,
            ),
            EventRecord::new(
                format!("{location} Music & Arts Festival"),
                display_date(festival_day),
                format!("{location} City Park"),
                location,
                second,
                0.85,
            ),
        ];

        Ok(SourceBatch { records, api_calls_used: 1 })
    }

    fn name(&self) -> &str { "mock-events" }
}

// ── Mock attendees ────────────────────────────────────────────────────────────

pub struct MockAttendeeSource;

#[async_trait]
impl AttendeeSource for MockAttendeeSource {
    async fn discover(
        &self,
        req: &DiscoverAttendeesRequest,
    ) -> Result<SourceBatch<AttendeeRecord>> {
        let event = req.event_name.trim();
        let tag: String = event
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        let post = |handle: &str, id: u64, engagement: &str, content: String, date: &str,
                    followers: u64, verified: bool| AttendeeRecord {
            username: format!("@{handle}"),
            engagement_type: engagement.to_string(),
            post_content: content,
            post_date: date.to_string(),
            followers_count: followers,
            verified,
            post_link: format!("https://twitter.com/{handle}/status/{id}"),
        };

        let records = vec![
            post(
                "tech_enthusiast",
                1_001,
                "attending",
                format!("Just got my tickets for {event}! Who else is going? Looking forward to the keynote #{tag}"),
                "2 days ago",
                1500,
                true,
            ),
            post(
                "local_insider",
                1_002,
                "interested",
                format!("Thinking about checking out {event} this year"),
                "5 days ago",
                3200,
                false,
            ),
            post(
                "weekend_explorer",
                1_003,
                "general_discussion",
                format!("Anyone been to {event} before? Worth it?"),
                "1 week ago",
                870,
                false,
            ),
        ];

        Ok(SourceBatch { records, api_calls_used: 1 })
    }

    fn name(&self) -> &str { "mock-attendees" }
}
