//! Summary figures shown above the attendee table.

use eventintel_common::AttendeeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendeeAnalytics {
    pub total_users: usize,
    pub verified_users: usize,
    /// Sum of `followers_count` across all attendees.
    pub total_reach: u64,
}

impl AttendeeAnalytics {
    pub fn from_attendees(attendees: &[AttendeeRecord]) -> Self {
        Self {
            total_users: attendees.len(),
            verified_users: attendees.iter().filter(|a| a.verified).count(),
            total_reach: attendees
                .iter()
                .fold(0u64, |sum, a| sum.saturating_add(a.followers_count)),
        }
    }
}

/// `4700` -> `"4,700"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
