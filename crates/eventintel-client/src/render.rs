//! HTML fragments for the results panels, dropdown and navigation.
//! Every function here is pure: it reads the values it is given and
//! returns markup. Interpolated values are escaped.

use eventintel_common::{AttendeeRecord, EventRecord};

use crate::analytics::{format_thousands, AttendeeAnalytics};
use crate::phase::{Phase, PhaseNav};
use crate::selection::EventSelection;
use crate::state::{ResultMeta, UiState};

pub const POST_PREVIEW_CHARS: usize = 60;

/// Everything the page shows, derived from one `UiState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub nav: String,
    pub active_section: &'static str,
    /// `None` keeps the panel hidden.
    pub events_stats: Option<String>,
    pub events_table: Option<String>,
    pub event_options: String,
    pub manual_event: String,
    pub attendees_stats: Option<String>,
    pub attendees_table: Option<String>,
    pub analytics: Option<AnalyticsView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsView {
    pub total_users: String,
    pub verified_users: String,
    pub total_reach: String,
}

pub fn render_page(state: &UiState) -> PageView {
    let attendees_visible = state.attendees_meta().is_some();
    PageView {
        nav: nav_links(&state.nav),
        active_section: state.nav.active().section_id(),
        events_stats: state.events_meta().map(stats_line),
        events_table: state.events_meta().map(|_| events_table(state.events())),
        event_options: event_options(state.events(), &state.selection),
        manual_event: escape_html(state.selection.manual_value()),
        attendees_stats: state.attendees_meta().map(stats_line),
        attendees_table: attendees_visible.then(|| attendees_table(state.attendees())),
        analytics: attendees_visible.then(|| analytics_view(&state.analytics())),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Display-only preview; the stored record keeps the full text.
pub fn truncate_post(content: &str) -> String {
    if content.chars().count() > POST_PREVIEW_CHARS {
        let head: String = content.chars().take(POST_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

pub fn stats_line(meta: ResultMeta) -> String {
    format!(
        "<span>Found: {}</span>\n<span>API Calls: {}</span>",
        meta.total, meta.api_calls_used
    )
}

pub fn events_table(events: &[EventRecord]) -> String {
    if events.is_empty() {
        return r#"<tr><td colspan="6">No events found</td></tr>"#.to_string();
    }

    events.iter().enumerate().map(|(index, event)| {
        let venue = if !event.exact_venue.is_empty() {
            event.exact_venue.as_str()
        } else {
            or_placeholder(&event.location, "Venue not specified")
        };
        let confidence = (event.confidence_score * 100.0).round() as i64;
        format!(r#"<tr>
    <td><strong>{}</strong></td>
    <td>{}</td>
    <td>{}</td>
    <td>{}</td>
    <td>{}%</td>
    <td><button class="btn-secondary" data-action="analyze" data-event-name="{}" data-index="{}">Analyze</button></td>
</tr>"#,
            escape_html(or_placeholder(&event.event_name, "Unknown")),
            escape_html(or_placeholder(&event.exact_date, "Date not specified")),
            escape_html(venue),
            event.category,
            confidence,
            escape_html(&event.event_name),
            index,
        )
    }).collect::<Vec<_>>().join("\n")
}

pub fn attendees_table(attendees: &[AttendeeRecord]) -> String {
    if attendees.is_empty() {
        return r#"<tr><td colspan="6">No attendees found</td></tr>"#.to_string();
    }

    attendees.iter().map(|a| {
        format!(r#"<tr>
    <td>{}</td>
    <td>{}</td>
    <td>{}</td>
    <td>{}</td>
    <td>{}</td>
    <td><a href="{}" target="_blank" class="btn-secondary">View</a></td>
</tr>"#,
            escape_html(or_placeholder(&a.username, "@unknown")),
            escape_html(or_placeholder(&a.engagement_type, "general_discussion")),
            escape_html(&truncate_post(or_placeholder(&a.post_content, "No content"))),
            escape_html(or_placeholder(&a.post_date, "Unknown date")),
            a.followers_count,
            escape_html(or_placeholder(&a.post_link, "#")),
        )
    }).collect::<Vec<_>>().join("\n")
}

/// Dropdown options: the placeholder, then one per event.
pub fn event_options(events: &[EventRecord], selection: &EventSelection) -> String {
    let chosen = selection.dropdown_value();
    let mut html = format!(
        r#"<option value=""{}>Select an event...</option>"#,
        if chosen.is_empty() { " selected" } else { "" }
    );
    for event in events {
        let selected = if !chosen.is_empty() && event.event_name == chosen { " selected" } else { "" };
        html.push_str(&format!(
            r#"
<option value="{}"{}>{} ({})</option>"#,
            escape_html(&event.event_name),
            selected,
            escape_html(&event.event_name),
            escape_html(&event.exact_date),
        ));
    }
    html
}

pub fn analytics_view(stats: &AttendeeAnalytics) -> AnalyticsView {
    AnalyticsView {
        total_users: stats.total_users.to_string(),
        verified_users: stats.verified_users.to_string(),
        total_reach: format_thousands(stats.total_reach),
    }
}

pub fn nav_links(nav: &PhaseNav) -> String {
    Phase::ALL.iter().map(|phase| {
        let class = if nav.is_visible(*phase) { "nav-link active" } else { "nav-link" };
        format!(r##"<a class="{}" href="#{}">{}</a>"##, class, phase.section_id(), phase.title())
    }).collect::<Vec<_>>().join("\n")
}
