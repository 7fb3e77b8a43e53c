//! Fakes and fixtures shared by the Event Intelligence test suites.
//!
//!   ScriptedApi    — `DiscoveryApi` that replays queued replies and records requests
//!   RecordingHost  — `UiHost` that records alerts, loading toggles and downloads
//!   sample_*       — small record sets with known totals

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use eventintel_client::api::DiscoveryApi;
use eventintel_client::host::{ExportFile, UiHost};
use eventintel_client::ClientError;
use eventintel_common::{
    AttendeeRecord, AttendeesEnvelope, Category, DiscoverAttendeesRequest,
    DiscoverEventsRequest, EventRecord, EventsEnvelope,
};

// ---------------------------------------------------------------------------
// ScriptedApi
// ---------------------------------------------------------------------------

/// One queued answer: an envelope, or a non-2xx status.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Envelope(T),
    Status(u16),
}

#[derive(Debug, Default)]
struct Script {
    events: VecDeque<Reply<EventsEnvelope>>,
    attendees: VecDeque<Reply<AttendeesEnvelope>>,
    event_requests: Vec<DiscoverEventsRequest>,
    attendee_requests: Vec<DiscoverAttendeesRequest>,
}

/// Cloning shares the script, so a test can keep a handle after moving
/// one clone into the controller.
#[derive(Debug, Clone, Default)]
pub struct ScriptedApi {
    inner: Arc<Mutex<Script>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn reply_events(&self, reply: Reply<EventsEnvelope>) -> &Self {
        self.script().events.push_back(reply);
        self
    }

    pub fn reply_attendees(&self, reply: Reply<AttendeesEnvelope>) -> &Self {
        self.script().attendees.push_back(reply);
        self
    }

    pub fn event_requests(&self) -> Vec<DiscoverEventsRequest> {
        self.script().event_requests.clone()
    }

    pub fn attendee_requests(&self) -> Vec<DiscoverAttendeesRequest> {
        self.script().attendee_requests.clone()
    }

    pub fn total_requests(&self) -> usize {
        let script = self.script();
        script.event_requests.len() + script.attendee_requests.len()
    }
}

fn play<T>(reply: Option<Reply<T>>) -> Result<T, ClientError> {
    match reply {
        Some(Reply::Envelope(env)) => Ok(env),
        Some(Reply::Status(code)) => Err(ClientError::HttpStatus(code)),
        None => Err(ClientError::HttpStatus(503)),
    }
}

#[async_trait]
impl DiscoveryApi for ScriptedApi {
    async fn discover_events(
        &self,
        req: &DiscoverEventsRequest,
    ) -> Result<EventsEnvelope, ClientError> {
        let mut script = self.script();
        script.event_requests.push(req.clone());
        play(script.events.pop_front())
    }

    async fn discover_attendees(
        &self,
        req: &DiscoverAttendeesRequest,
    ) -> Result<AttendeesEnvelope, ClientError> {
        let mut script = self.script();
        script.attendee_requests.push(req.clone());
        play(script.attendees.pop_front())
    }
}

// ---------------------------------------------------------------------------
// RecordingHost
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Alert(String),
    ShowLoading(String),
    HideLoading,
    Download(ExportFile),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Alert(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn loading_texts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::ShowLoading(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn hide_count(&self) -> usize {
        self.events.iter().filter(|e| **e == HostEvent::HideLoading).count()
    }

    pub fn downloads(&self) -> Vec<&ExportFile> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Download(file) => Some(file),
                _ => None,
            })
            .collect()
    }
}

impl UiHost for RecordingHost {
    fn alert(&mut self, message: &str) {
        self.events.push(HostEvent::Alert(message.to_string()));
    }

    fn show_loading(&mut self, text: &str) {
        self.events.push(HostEvent::ShowLoading(text.to_string()));
    }

    fn hide_loading(&mut self) {
        self.events.push(HostEvent::HideLoading);
    }

    fn download(&mut self, file: ExportFile) {
        self.events.push(HostEvent::Download(file));
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn sample_events(location: &str) -> Vec<EventRecord> {
    vec![
        EventRecord::new(
            format!("{location} Tech Summit"),
            "January 1, 2024",
            format!("{location} Convention Center"),
            location,
            Category::Technology,
            0.92,
        ),
        EventRecord::new(
            format!("{location} Music & Arts Festival"),
            "January 8, 2024",
            format!("{location} City Park"),
            location,
            Category::Music,
            0.85,
        ),
    ]
}

/// Two attendees: reach 4700, one verified.
pub fn sample_attendees() -> Vec<AttendeeRecord> {
    vec![
        AttendeeRecord {
            username: "@tech_enthusiast".into(),
            engagement_type: "attending".into(),
            post_content: "Just got my tickets! Who else is going? Looking forward to the keynote session".into(),
            post_date: "2 days ago".into(),
            followers_count: 1500,
            verified: true,
            post_link: "https://twitter.com/tech_enthusiast/status/1001".into(),
        },
        AttendeeRecord {
            username: "@local_insider".into(),
            engagement_type: "interested".into(),
            post_content: "Thinking about going".into(),
            post_date: "5 days ago".into(),
            followers_count: 3200,
            verified: false,
            post_link: "https://twitter.com/local_insider/status/1002".into(),
        },
    ]
}

pub fn events_reply(events: Vec<EventRecord>) -> Reply<EventsEnvelope> {
    let n = events.len();
    Reply::Envelope(EventsEnvelope::truncated(events, n, 1))
}

pub fn attendees_reply(attendees: Vec<AttendeeRecord>) -> Reply<AttendeesEnvelope> {
    let n = attendees.len();
    Reply::Envelope(AttendeesEnvelope::truncated(attendees, n, 1))
}
