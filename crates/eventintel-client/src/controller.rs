//! User actions: form submissions, selection input, navigation and export.
//!
//! Every failure is surfaced through `UiHost::alert` and leaves the
//! previously displayed data untouched. Once the loading indicator has been
//! shown it is hidden exactly once, whatever the outcome.

use tracing::{debug, error, info};

use eventintel_common::{DiscoverAttendeesRequest, DiscoverEventsRequest};

use crate::api::DiscoveryApi;
use crate::error::ClientError;
use crate::export::{export_records, ExportFormat};
use crate::forms::EventSearchForm;
use crate::host::{ExportFile, UiHost};
use crate::phase::Phase;
use crate::render::{render_page, PageView};
use crate::state::UiState;

pub struct UiController<A, H> {
    api: A,
    host: H,
    state: UiState,
}

impl<A: DiscoveryApi, H: UiHost> UiController<A, H> {
    pub fn new(api: A, host: H) -> Self {
        Self { api, host, state: UiState::default() }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn view(&self) -> PageView {
        render_page(&self.state)
    }

    // ── Phase 1: events ──────────────────────────────────────────────────────

    pub async fn discover_events(&mut self, form: &EventSearchForm) -> Result<(), ClientError> {
        let location = form.location.trim();
        if location.is_empty() {
            return Err(self.reject("Please enter a location"));
        }

        let categories = form.category_labels();
        if categories.is_empty() {
            return Err(self.reject("Please select at least one category"));
        }

        let req = DiscoverEventsRequest {
            location: location.to_string(),
            start_date: form.start_date.clone(),
            end_date: form.end_date.clone(),
            categories,
            max_results: form.max_results,
        };

        self.host.show_loading(&format!(
            "Discovering {} events in {}...",
            form.max_results, location
        ));
        let outcome = match self.api.discover_events(&req).await {
            Ok(env) if env.success => Ok(env),
            Ok(env) => Err(ClientError::Rejected(
                env.error.unwrap_or_else(|| "Failed to discover events".to_string()),
            )),
            Err(e) => Err(e),
        };
        self.host.hide_loading();

        match outcome {
            Ok(env) => {
                info!("Discovered {} events ({} total)", env.events.len(), env.total_events);
                self.state.apply_events(env);
                Ok(())
            }
            Err(e) => {
                error!("Event discovery error: {e}");
                self.host.alert(&format!("Error discovering events: {e}"));
                Err(e)
            }
        }
    }

    // ── Phase 2: attendees ───────────────────────────────────────────────────

    pub async fn discover_attendees(&mut self, max_results: u32) -> Result<(), ClientError> {
        let event_name = self.state.selection.resolve().map(str::to_string);
        let Some(event_name) = event_name else {
            return Err(self.reject("Please select or enter an event name"));
        };

        let req = DiscoverAttendeesRequest { event_name, max_results };

        self.host.show_loading(&format!(
            "Finding {} attendees for \"{}\"...",
            max_results, req.event_name
        ));
        let outcome = match self.api.discover_attendees(&req).await {
            Ok(env) if env.success => Ok(env),
            Ok(env) => Err(ClientError::Rejected(
                env.error.unwrap_or_else(|| "Failed to discover attendees".to_string()),
            )),
            Err(e) => Err(e),
        };
        self.host.hide_loading();

        match outcome {
            Ok(env) => {
                info!("Found {} attendees for {}", env.attendees.len(), req.event_name);
                self.state.apply_attendees(env);
                Ok(())
            }
            Err(e) => {
                error!("Attendee discovery error: {e}");
                self.host.alert(&format!("Error discovering attendees: {e}"));
                Err(e)
            }
        }
    }

    /// "Analyze" on an event row: preselect it and jump to the attendee phase.
    pub fn analyze_attendees(&mut self, event_name: &str) {
        self.state.selection.choose_dropdown(event_name);
        self.state.nav.activate(Phase::Attendees);
    }

    // ── Inputs and navigation ────────────────────────────────────────────────

    pub fn on_manual_event_input(&mut self, text: &str) {
        self.state.selection.type_manual(text);
    }

    pub fn on_event_select_change(&mut self, value: &str) {
        self.state.selection.choose_dropdown(value);
    }

    pub fn on_nav_click(&mut self, href: &str) {
        if !self.state.nav.navigate(href) {
            debug!("Ignoring navigation to unknown phase {href}");
        }
    }

    // ── Export ───────────────────────────────────────────────────────────────

    pub fn export_events(&mut self, format: ExportFormat) -> Result<(), ClientError> {
        if self.state.events().is_empty() {
            return Err(self.reject("No events to export"));
        }
        let file = export_records(self.state.events(), "events", format);
        self.finish_export(file, "Events", format)
    }

    pub fn export_attendees(&mut self, format: ExportFormat) -> Result<(), ClientError> {
        if self.state.attendees().is_empty() {
            return Err(self.reject("No attendees to export"));
        }
        let file = export_records(self.state.attendees(), "attendees", format);
        self.finish_export(file, "Attendees", format)
    }

    fn finish_export(
        &mut self,
        file: Result<ExportFile, ClientError>,
        what: &str,
        format: ExportFormat,
    ) -> Result<(), ClientError> {
        match file {
            Ok(file) => {
                info!("Exporting {}", file.filename);
                self.host.download(file);
                self.host.alert(&format!("{what} exported as {format}"));
                Ok(())
            }
            Err(e) => {
                error!("{what} export error: {e}");
                self.host.alert(&e.to_string());
                Err(e)
            }
        }
    }

    fn reject(&mut self, message: &str) -> ClientError {
        self.host.alert(message);
        ClientError::Validation(message.to_string())
    }
}
