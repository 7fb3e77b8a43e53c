//! Form inputs as the controller receives them.

use chrono::{Local, Months, NaiveDate};
use eventintel_common::Category;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_MAX_EVENTS: u32 = 10;
pub const DEFAULT_MAX_ATTENDEES: u32 = 20;

/// Phase 1 form: where, when, which kinds of event, and how many.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSearchForm {
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub max_results: u32,
    /// Checked category boxes, in display order.
    pub categories: Vec<Category>,
}

impl EventSearchForm {
    /// Empty form with the date range preset to today .. today + 1 month.
    pub fn starting(today: NaiveDate) -> Self {
        let next_month = today.checked_add_months(Months::new(1)).unwrap_or(today);
        Self {
            location: String::new(),
            start_date: today.format(DATE_INPUT_FORMAT).to_string(),
            end_date: next_month.format(DATE_INPUT_FORMAT).to_string(),
            max_results: DEFAULT_MAX_EVENTS,
            categories: Vec::new(),
        }
    }

    /// Checked categories as request labels, without duplicates.
    pub fn category_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::with_capacity(self.categories.len());
        for c in &self.categories {
            if !labels.iter().any(|l| l == c.as_str()) {
                labels.push(c.as_str().to_string());
            }
        }
        labels
    }
}

impl Default for EventSearchForm {
    fn default() -> Self {
        Self::starting(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_preset_to_one_month_window() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let form = EventSearchForm::starting(today);
        assert_eq!(form.start_date, "2024-01-15");
        assert_eq!(form.end_date, "2024-02-15");
        assert!(form.categories.is_empty());
        assert_eq!(form.max_results, DEFAULT_MAX_EVENTS);
    }

    #[test]
    fn test_month_end_is_clamped() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(EventSearchForm::starting(today).end_date, "2024-02-29");
    }

    #[test]
    fn test_duplicate_categories_collapse() {
        let form = EventSearchForm {
            categories: vec![Category::Music, Category::Arts, Category::Music],
            ..EventSearchForm::starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        };
        assert_eq!(form.category_labels(), vec!["music", "arts"]);
    }
}
