//! English names used by the calendar header and ARIA labels.

use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Single-letter headers for narrow screens.
pub const DAY_NAMES_SHORT: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Header text for the displayed month, e.g. `"March 2025"`.
pub fn month_title(anchor: NaiveDate) -> String {
    format!("{} {}", month_name(anchor), anchor.year())
}

/// e.g. `"Select Mon, March 3, 2025"`.
pub fn cell_aria_label(date: NaiveDate) -> String {
    format!(
        "Select {}, {} {}, {}",
        day_name(date),
        month_name(date),
        date.day(),
        date.year()
    )
}
