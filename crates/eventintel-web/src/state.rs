//! Shared application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use crate::sources::{AttendeeSource, EventSource, MockAttendeeSource, MockEventSource};

/// Shared state injected into every Axum handler. Holds no mutable data:
/// each request is served independently.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventSource>,
    pub attendees: Arc<dyn AttendeeSource>,
    /// Root of the frontend assets; `index.html` is the SPA entry document.
    pub frontend_dir: PathBuf,
}

impl AppState {
    pub fn new(
        events: Arc<dyn EventSource>,
        attendees: Arc<dyn AttendeeSource>,
        frontend_dir: impl Into<PathBuf>,
    ) -> Self {
        Self { events, attendees, frontend_dir: frontend_dir.into() }
    }

    pub fn with_mock_sources(frontend_dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(MockEventSource), Arc::new(MockAttendeeSource), frontend_dir)
    }

    pub fn index_document(&self) -> PathBuf {
        self.frontend_dir.join("index.html")
    }
}

pub type SharedState = Arc<AppState>;
