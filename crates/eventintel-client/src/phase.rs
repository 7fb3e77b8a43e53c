//! Phase navigation: exactly one named section is visible at a time.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Discovery,
    Attendees,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::Discovery, Phase::Attendees];

    /// Section id, also used as the nav-link anchor (`#phase1`).
    pub fn section_id(&self) -> &'static str {
        match self {
            Phase::Discovery => "phase1",
            Phase::Attendees => "phase2",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Phase::Discovery => "Event Discovery",
            Phase::Attendees => "Attendee Discovery",
        }
    }

    /// Resolve a nav-link href such as `#phase2`.
    pub fn from_href(href: &str) -> Option<Phase> {
        let id = href.strip_prefix('#').unwrap_or(href);
        Phase::ALL.into_iter().find(|p| p.section_id() == id)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseNav {
    active: Phase,
}

impl PhaseNav {
    pub fn active(&self) -> Phase {
        self.active
    }

    pub fn activate(&mut self, phase: Phase) {
        self.active = phase;
    }

    /// Nav-link click. Unknown anchors leave the current phase in place.
    pub fn navigate(&mut self, href: &str) -> bool {
        match Phase::from_href(href) {
            Some(phase) => {
                self.activate(phase);
                true
            }
            None => false,
        }
    }

    pub fn is_visible(&self, phase: Phase) -> bool {
        self.active == phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_first() {
        let nav = PhaseNav::default();
        assert_eq!(nav.active(), Phase::ALL[0]);
    }

    #[test]
    fn test_exactly_one_phase_visible() {
        let mut nav = PhaseNav::default();
        for href in ["#phase2", "#phase1", "#phase2"] {
            assert!(nav.navigate(href));
            let visible = Phase::ALL.iter().filter(|p| nav.is_visible(**p)).count();
            assert_eq!(visible, 1);
        }
        assert_eq!(nav.active(), Phase::Attendees);
    }

    #[test]
    fn test_unknown_anchor_is_ignored() {
        let mut nav = PhaseNav::default();
        nav.activate(Phase::Attendees);
        assert!(!nav.navigate("#settings"));
        assert_eq!(nav.active(), Phase::Attendees);
    }
}
