//! Which event the attendee lookup targets.
//!
//! The dropdown and the manual text field are mutually exclusive: whichever
//! the user touched last with a non-blank value is authoritative, and the
//! other is cleared. One value models both fields.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventSelection {
    #[default]
    None,
    /// Picked from the dropdown of discovered events.
    Dropdown(String),
    /// Typed into the manual event-name field.
    Manual(String),
}

impl EventSelection {
    /// Manual field input. Non-blank text clears any dropdown choice.
    pub fn type_manual(&mut self, text: &str) {
        if !text.trim().is_empty() {
            *self = EventSelection::Manual(text.to_string());
        } else if matches!(self, EventSelection::Manual(_)) {
            *self = EventSelection::None;
        }
    }

    /// Dropdown change. A real option clears the manual field; the empty
    /// placeholder option only clears a previous dropdown choice.
    pub fn choose_dropdown(&mut self, value: &str) {
        if !value.is_empty() {
            *self = EventSelection::Dropdown(value.to_string());
        } else if matches!(self, EventSelection::Dropdown(_)) {
            *self = EventSelection::None;
        }
    }

    pub fn dropdown_value(&self) -> &str {
        match self {
            EventSelection::Dropdown(v) => v,
            _ => "",
        }
    }

    pub fn manual_value(&self) -> &str {
        match self {
            EventSelection::Manual(v) => v,
            _ => "",
        }
    }

    /// The event name to look up, if any non-blank one is selected.
    pub fn resolve(&self) -> Option<&str> {
        let name = match self {
            EventSelection::None => return None,
            EventSelection::Dropdown(v) => v.as_str(),
            EventSelection::Manual(v) => v.trim(),
        };
        (!name.trim().is_empty()).then_some(name)
    }
}
