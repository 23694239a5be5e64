//! Display formats for the selected date.
//!
//! The display format only affects what the trigger shows. Change events
//! always carry the canonical `YYYY-MM-DD` form, see [`canonical`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const CANONICAL_PATTERN: &str = "%Y-%m-%d";

/// Canonical wire form of a date: `YYYY-MM-DD`.
pub fn canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_PATTERN).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date format `{0}` (expected MM/DD/YYYY, DD/MM/YYYY or YYYY-MM-DD)")]
pub struct DateFormatError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
}

impl DateFormat {
    pub fn all() -> [DateFormat; 3] {
        [
            DateFormat::MonthDayYear,
            DateFormat::DayMonthYear,
            DateFormat::Iso,
        ]
    }

    /// The literal name of the format, e.g. `"DD/MM/YYYY"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::Iso => "YYYY-MM-DD",
        }
    }

    /// The chrono strftime pattern for this format.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::Iso => CANONICAL_PATTERN,
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }

    /// Parses text written in this format. Invalid dates yield `None`.
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), self.pattern()).ok()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFormat {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::all()
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DateFormatError(s.to_string()))
    }
}
