//! Month grid and per-day keys for the workout calendar.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier for a calendar day: `YEAR-MONTH-DAY`, month 1-based, no padding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self(format!("{}-{}-{}", year, month, day))
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_ymd(date.year(), date.month(), date.day())
    }

    /// The calendar date this key names, if it names a real one.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let mut parts = self.0.splitn(3, '-');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DateKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One slot of the month grid. `day` is `None` for padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub day: Option<u32>,
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // Last day of this month is the day before the 1st of the next.
    next_first
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Sunday-first grid of the month containing `date`, padded to whole weeks.
pub fn month_matrix(date: NaiveDate) -> Vec<Cell> {
    let first = date.with_day(1).unwrap_or(date);
    let lead = first.weekday().num_days_from_sunday() as usize;
    let count = days_in_month(date);

    let mut cells = Vec::with_capacity(42);
    cells.extend(std::iter::repeat(Cell { day: None }).take(lead));
    cells.extend((1..=count).map(|day| Cell { day: Some(day) }));
    while cells.len() % 7 != 0 {
        cells.push(Cell { day: None });
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_key_is_unpadded_and_one_based() {
        assert_eq!(DateKey::for_date(ymd(2024, 1, 5)).as_str(), "2024-1-5");
        assert_eq!(DateKey::for_date(ymd(2023, 12, 31)).as_str(), "2023-12-31");
    }

    #[yare::parameterized(
        plain     = { "2024-3-9",   Some((2024, 3, 9)) },
        padded    = { "2024-03-09", Some((2024, 3, 9)) },
        bad_day   = { "2024-2-30",  None },
        truncated = { "2024-2",     None },
        garbage   = { "today",      None },
    )]
    fn date_key_parses(raw: &str, expected: Option<(i32, u32, u32)>) {
        let parsed = DateKey::from(raw).to_date();
        assert_eq!(parsed, expected.map(|(y, m, d)| ymd(y, m, d)));
    }

    #[yare::parameterized(
        january     = { 2024, 1, 31 },
        leap_feb    = { 2024, 2, 29 },
        common_feb  = { 2023, 2, 28 },
        century_feb = { 1900, 2, 28 },
        april       = { 2024, 4, 30 },
        december    = { 2024, 12, 31 },
    )]
    fn month_lengths(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(ymd(year, month, 1)), expected);
    }

    #[test]
    fn month_starting_on_sunday_has_no_lead() {
        // 1 September 2024 was a Sunday.
        let cells = month_matrix(ymd(2024, 9, 17));
        assert_eq!(cells[0], Cell { day: Some(1) });
        assert_eq!(cells.len(), 35);
    }

    #[test]
    fn january_2024_layout() {
        // Monday start, 31 days: 1 lead + 31 days + 3 trailing.
        let cells = month_matrix(ymd(2024, 1, 1));
        assert_eq!(cells.len(), 35);
        assert_eq!(cells[0].day, None);
        assert_eq!(cells[1].day, Some(1));
        assert_eq!(cells[31].day, Some(31));
        assert!(cells[32..].iter().all(|c| c.day.is_none()));
    }

    #[test]
    fn february_2015_fits_four_rows() {
        // Sunday start and 28 days.
        let cells = month_matrix(ymd(2015, 2, 10));
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(|c| c.day.is_some()));
    }

    proptest! {
        #[test]
        fn matrix_is_whole_weeks(year in 1900i32..2200, month in 1u32..=12, day in 1u32..=28) {
            let cells = month_matrix(ymd(year, month, day));
            prop_assert_eq!(cells.len() % 7, 0);
        }

        #[test]
        fn first_day_lands_in_its_weekday_column(year in 1900i32..2200, month in 1u32..=12, day in 1u32..=28) {
            let date = ymd(year, month, day);
            let cells = month_matrix(date);
            let first = cells.iter().position(|c| c.day.is_some()).unwrap();
            let expected = ymd(year, month, 1).weekday().num_days_from_sunday() as usize;
            prop_assert_eq!(first, expected);
            prop_assert_eq!(cells[first].day, Some(1));
        }

        #[test]
        fn matrix_ignores_day_of_month(year in 1900i32..2200, month in 1u32..=12, a in 1u32..=28, b in 1u32..=28) {
            prop_assert_eq!(month_matrix(ymd(year, month, a)), month_matrix(ymd(year, month, b)));
        }

        #[test]
        fn days_are_consecutive(year in 1900i32..2200, month in 1u32..=12) {
            let date = ymd(year, month, 1);
            let days: Vec<u32> = month_matrix(date).iter().filter_map(|c| c.day).collect();
            let expected: Vec<u32> = (1..=days_in_month(date)).collect();
            prop_assert_eq!(days, expected);
        }
    }

    #[test]
    fn weekday_labels_start_on_sunday() {
        assert_eq!(WEEKDAY_LABELS[Weekday::Sun.num_days_from_sunday() as usize], "Sun");
        assert_eq!(WEEKDAY_LABELS[Weekday::Sat.num_days_from_sunday() as usize], "Sat");
    }
}
