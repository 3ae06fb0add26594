//! Due-date phrases attached to add-task commands.

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static IN_N_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)in\s+(\d+)\s+days").expect("valid regex"));

const FULL_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const YEARLESS_FORMATS: &[&str] = &["%B %d %Y", "%b %d %Y", "%d %B %Y", "%d %b %Y"];

/// Resolve a due-date phrase relative to `today`.
///
/// Understands "tomorrow", "in N days", and common absolute formats. A month
/// and day without a year are taken in the current year. Returns `None` when
/// the phrase cannot be read.
pub fn parse_due_date(phrase: &str, today: NaiveDate) -> Option<NaiveDate> {
    let phrase = phrase.trim().trim_end_matches(['.', '!', '?']).trim();
    let lower = phrase.to_lowercase();

    if lower.contains("tomorrow") {
        return today.checked_add_days(Days::new(1));
    }

    if let Some(caps) = IN_N_DAYS.captures(&lower) {
        let days: u64 = caps[1].parse().ok()?;
        return today.checked_add_days(Days::new(days));
    }

    FULL_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(phrase, fmt).ok())
        .or_else(|| {
            let with_year = format!("{} {}", phrase, today.year());
            YEARLESS_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(&with_year, fmt).ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_phrases() {
        assert_eq!(parse_due_date("tomorrow", today()), Some(ymd(2024, 2, 28)));
        assert_eq!(parse_due_date("Tomorrow morning", today()), Some(ymd(2024, 2, 28)));
        assert_eq!(parse_due_date("in 3 days", today()), Some(ymd(2024, 3, 1)));
        assert_eq!(parse_due_date("in 0 days", today()), Some(today()));
    }

    #[test]
    fn test_absolute_formats() {
        assert_eq!(parse_due_date("2024-12-25", today()), Some(ymd(2024, 12, 25)));
        assert_eq!(parse_due_date("2025/01/05", today()), Some(ymd(2025, 1, 5)));
        assert_eq!(parse_due_date("05/01/2025", today()), Some(ymd(2025, 1, 5)));
        assert_eq!(parse_due_date("March 3, 2025", today()), Some(ymd(2025, 3, 3)));
        assert_eq!(parse_due_date("3 march 2025", today()), Some(ymd(2025, 3, 3)));
    }

    #[test]
    fn test_month_day_uses_current_year() {
        assert_eq!(parse_due_date("june 9", today()), Some(ymd(2024, 6, 9)));
    }

    #[test]
    fn test_unreadable() {
        assert_eq!(parse_due_date("someday", today()), None);
        assert_eq!(parse_due_date("home", today()), None);
        assert_eq!(parse_due_date("2024-13-40", today()), None);
    }
}
