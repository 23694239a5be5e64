//! Month grid generation.
//!
//! A grid is a run of leading blanks (one per weekday before the 1st, with
//! Sunday as column 0) followed by one cell per day of the month. There is
//! no trailing padding.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// First day of the month containing `date`.
pub fn month_anchor(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in `month` (1-12) of `year`, or `None` for an invalid month.
///
/// Computed as "first of next month minus one day" so leap years come
/// straight out of the calendar arithmetic.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some((next - Duration::days(1)).day())
}

/// Moves a month anchor by `delta` months, rolling over year boundaries.
///
/// Returns the input unchanged if the result would leave chrono's range.
pub fn shift_month(anchor: NaiveDate, delta: i32) -> NaiveDate {
    let anchor = month_anchor(anchor);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        anchor.checked_add_months(months)
    } else {
        anchor.checked_sub_months(months)
    };
    shifted.unwrap_or(anchor)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    anchor: NaiveDate,
    leading_blanks: usize,
    days: Vec<NaiveDate>,
}

impl MonthGrid {
    /// Builds the grid for `month` (1-12) of `year`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let anchor = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self::for_anchor(anchor))
    }

    /// Builds the grid for the month containing `date`.
    pub fn for_anchor(date: NaiveDate) -> Self {
        let anchor = month_anchor(date);
        let leading_blanks = anchor.weekday().num_days_from_sunday() as usize;
        let days = anchor
            .iter_days()
            .take_while(|d| d.month() == anchor.month())
            .collect();

        Self {
            anchor,
            leading_blanks,
            days,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Cells in render order: `None` for a blank, `Some(date)` for a day.
    pub fn cells(&self) -> Vec<Option<NaiveDate>> {
        std::iter::repeat(None)
            .take(self.leading_blanks)
            .chain(self.days.iter().copied().map(Some))
            .collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.anchor.year() && date.month() == self.anchor.month()
    }
}
