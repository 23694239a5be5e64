use crate::input::RawDateInput;
use chrono::NaiveDate;

/// Inclusive selection window. Dates outside are rendered but not selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Unparsable bounds are dropped rather than rejected.
    pub fn from_raw(min: &RawDateInput, max: &RawDateInput) -> Self {
        Self::new(min.parse(), max.parse())
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }

    pub fn allows(&self, date: NaiveDate) -> bool {
        !self.is_disabled(date)
    }
}
