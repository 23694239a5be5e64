use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// A value handed to the picker by its host.
///
/// Hosts usually bind the field to a form string, but a date (or a
/// date-time whose time of day is ignored) can be passed directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawDateInput {
    #[default]
    Empty,
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

const TEXT_DATE_PATTERNS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const TEXT_DATE_TIME_PATTERNS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

impl RawDateInput {
    /// Resolves the input to a calendar date. Never fails: anything that is
    /// not a recognisable date is `None`.
    pub fn parse(&self) -> Option<NaiveDate> {
        match self {
            RawDateInput::Empty => None,
            RawDateInput::Date(date) => Some(*date),
            RawDateInput::DateTime(date_time) => Some(date_time.date()),
            RawDateInput::Text(text) => parse_text(text),
        }
    }
}

fn parse_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    TEXT_DATE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(text, pattern).ok())
        .or_else(|| {
            TEXT_DATE_TIME_PATTERNS
                .iter()
                .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
                .map(|dt| dt.date())
        })
        // Offset-qualified timestamps keep the date as written.
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_local().date())
        })
}

impl From<&str> for RawDateInput {
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            RawDateInput::Empty
        } else {
            RawDateInput::Text(value.to_string())
        }
    }
}

impl From<String> for RawDateInput {
    fn from(value: String) -> Self {
        RawDateInput::from(value.as_str())
    }
}

impl From<NaiveDate> for RawDateInput {
    fn from(value: NaiveDate) -> Self {
        RawDateInput::Date(value)
    }
}

impl From<NaiveDateTime> for RawDateInput {
    fn from(value: NaiveDateTime) -> Self {
        RawDateInput::DateTime(value)
    }
}

impl<T: Into<RawDateInput>> From<Option<T>> for RawDateInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_text_forms() {
        let expected = Some(date(2025, 3, 3));
        assert_eq!(RawDateInput::from("2025-03-03").parse(), expected);
        assert_eq!(RawDateInput::from(" 2025-03-03 ").parse(), expected);
        assert_eq!(RawDateInput::from("03/03/2025").parse(), expected);
        assert_eq!(RawDateInput::from("2025/03/03").parse(), expected);
        assert_eq!(RawDateInput::from("2025-03-03T23:30:00").parse(), expected);
        assert_eq!(RawDateInput::from("2025-03-03T23:30").parse(), expected);
        assert_eq!(RawDateInput::from("2025-03-03T23:30:00.250").parse(), expected);
        assert_eq!(RawDateInput::from("2025-03-03T23:30:00-08:00").parse(), expected);
    }

    #[test]
    fn test_invalid_input_is_none() {
        assert_eq!(RawDateInput::from("").parse(), None);
        assert_eq!(RawDateInput::from("   ").parse(), None);
        assert_eq!(RawDateInput::from("not a date").parse(), None);
        assert_eq!(RawDateInput::from("2025-02-30").parse(), None);
        assert_eq!(RawDateInput::from(None::<String>).parse(), None);
    }

    #[test]
    fn test_typed_inputs() {
        let d = date(2024, 2, 29);
        assert_eq!(RawDateInput::from(d).parse(), Some(d));
        assert_eq!(RawDateInput::from(Some(d)).parse(), Some(d));
        let dt = d.and_hms_opt(18, 45, 0).unwrap();
        assert_eq!(RawDateInput::from(dt).parse(), Some(d));
    }

    #[test]
    fn test_empty_string_maps_to_empty() {
        assert_eq!(RawDateInput::from(""), RawDateInput::Empty);
        assert_eq!(RawDateInput::from(String::from("x")), RawDateInput::Text("x".into()));
    }
}
