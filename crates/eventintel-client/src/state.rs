//! The single UI-state value owned by the controller.

use eventintel_common::{AttendeeRecord, AttendeesEnvelope, EventRecord, EventsEnvelope};

use crate::analytics::AttendeeAnalytics;
use crate::phase::PhaseNav;
use crate::selection::EventSelection;

/// Counters reported alongside a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultMeta {
    pub total: usize,
    pub api_calls_used: u32,
}

/// Result lists hold the latest successful response only; each success
/// replaces the list wholesale. `*_meta` is `None` until the first success,
/// which is also when the matching results panel becomes visible.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    events: Vec<EventRecord>,
    events_meta: Option<ResultMeta>,
    attendees: Vec<AttendeeRecord>,
    attendees_meta: Option<ResultMeta>,
    pub selection: EventSelection,
    pub nav: PhaseNav,
}

impl UiState {
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn events_meta(&self) -> Option<ResultMeta> {
        self.events_meta
    }

    pub fn attendees(&self) -> &[AttendeeRecord] {
        &self.attendees
    }

    pub fn attendees_meta(&self) -> Option<ResultMeta> {
        self.attendees_meta
    }

    pub fn analytics(&self) -> AttendeeAnalytics {
        AttendeeAnalytics::from_attendees(&self.attendees)
    }

    /// Takes over a successful events envelope. The dropdown is rebuilt from
    /// the new list, so a dropdown choice that no longer exists is dropped.
    pub(crate) fn apply_events(&mut self, envelope: EventsEnvelope) {
        self.events_meta = Some(ResultMeta {
            total: envelope.total_events,
            api_calls_used: envelope.api_calls_used,
        });
        self.events = envelope.events;

        if let EventSelection::Dropdown(name) = &self.selection {
            if !self.events.iter().any(|e| &e.event_name == name) {
                self.selection = EventSelection::None;
            }
        }
    }

    pub(crate) fn apply_attendees(&mut self, envelope: AttendeesEnvelope) {
        self.attendees_meta = Some(ResultMeta {
            total: envelope.total_attendees,
            api_calls_used: envelope.api_calls_used,
        });
        self.attendees = envelope.attendees;
    }
}
