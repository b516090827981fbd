//! Weekend value object.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::day::WeekendDay;
use crate::error::CalendarError;

/// A Saturday and the Sunday immediately following it.
///
/// A `Weekend` is fully determined by its Saturday. The Sunday may fall in
/// the next calendar month or year; no filtering is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weekend {
    saturday: NaiveDate,
    sunday: NaiveDate,
}

impl Weekend {
    /// Creates a `Weekend` from its Saturday.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotASaturday`] if `saturday` falls on any
    /// other weekday, or [`CalendarError::YearOutOfRange`] if the following
    /// Sunday cannot be represented.
    pub fn from_saturday(saturday: NaiveDate) -> Result<Self, CalendarError> {
        if saturday.weekday() != Weekday::Sat {
            return Err(CalendarError::NotASaturday { date: saturday });
        }
        let sunday = saturday.succ_opt().ok_or(CalendarError::YearOutOfRange {
            year: saturday.year(),
        })?;
        Ok(Self { saturday, sunday })
    }

    /// Returns the Saturday of this weekend.
    pub fn saturday(self) -> NaiveDate {
        self.saturday
    }

    /// Returns the Sunday of this weekend.
    pub fn sunday(self) -> NaiveDate {
        self.sunday
    }

    /// Returns the calendar date of the given weekend day.
    pub fn day(self, day: WeekendDay) -> NaiveDate {
        match day {
            WeekendDay::Saturday => self.saturday,
            WeekendDay::Sunday => self.sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_saturday_valid() {
        let weekend = Weekend::from_saturday(date(2024, 1, 6)).unwrap();
        assert_eq!(weekend.saturday(), date(2024, 1, 6));
        assert_eq!(weekend.sunday(), date(2024, 1, 7));
    }

    #[test]
    fn from_saturday_rejects_other_weekdays() {
        let monday = date(2024, 1, 1);
        assert_eq!(
            Weekend::from_saturday(monday).unwrap_err(),
            CalendarError::NotASaturday { date: monday }
        );
    }

    #[test]
    fn sunday_crosses_month_boundary() {
        let weekend = Weekend::from_saturday(date(2024, 3, 30)).unwrap();
        assert_eq!(weekend.sunday(), date(2024, 3, 31));

        let weekend = Weekend::from_saturday(date(2024, 6, 29)).unwrap();
        assert_eq!(weekend.sunday(), date(2024, 6, 30));
    }

    #[test]
    fn sunday_crosses_year_boundary() {
        let weekend = Weekend::from_saturday(date(2022, 12, 31)).unwrap();
        assert_eq!(weekend.sunday(), date(2023, 1, 1));
    }

    #[test]
    fn day_selects_either_date() {
        let weekend = Weekend::from_saturday(date(2024, 1, 13)).unwrap();
        assert_eq!(weekend.day(WeekendDay::Saturday), date(2024, 1, 13));
        assert_eq!(weekend.day(WeekendDay::Sunday), date(2024, 1, 14));
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Weekend>();
    }
}
