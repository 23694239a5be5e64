//! Date helpers shared by the page sections.
//!
//! "Today" always comes from the browser's local calendar, never from UTC.

use calendar::labels::{month_name, MONTH_NAMES};
use chrono::{Datelike, NaiveDate};

/// Today's date in the browser's local time zone.
pub fn today_local() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Format a date for prose
/// Example: 2025-03-03 -> "March 3, 2025"
pub fn format_long(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date), date.day(), date.year())
}

/// Format a canonical YYYY-MM-DD string for prose, passing anything else through
/// Example: "2025-03-03" -> "March 3, 2025"
pub fn format_long_str(date_str: &str) -> String {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map(format_long)
        .unwrap_or_else(|_| date_str.to_string())
}

/// Short month name, e.g. "Mar"
pub fn short_month_name(date: NaiveDate) -> &'static str {
    &MONTH_NAMES[date.month0() as usize][..3]
}
