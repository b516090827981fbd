//! Weekend enumeration for a calendar year.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::weekend::Weekend;

/// Enumerates every weekend of `year` in calendar order.
///
/// The sequence starts at the first Saturday on or after January 1 (January
/// 1 itself counts when it is a Saturday) and advances in 7-day steps until
/// the Saturday leaves `year`. The last weekend's Sunday may fall in the
/// following year; it is emitted unfiltered.
///
/// Every year yields 52 or 53 weekends.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is outside the range
/// representable by `chrono::NaiveDate`.
///
/// # Example
///
/// ```ignore
/// let weekends = weekends_of_year(2024)?;
/// assert_eq!(weekends.len(), 52);
/// // Jan 1, 2024 is a Monday, so the first Saturday is Jan 6.
/// assert_eq!(weekends[0].saturday().day(), 6);
/// ```
pub fn weekends_of_year(year: i32) -> Result<Vec<Weekend>, CalendarError> {
    let out_of_range = CalendarError::YearOutOfRange { year };

    let mut saturday = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(out_of_range)?;
    while saturday.weekday() != Weekday::Sat {
        saturday = saturday.succ_opt().ok_or(out_of_range)?;
    }

    let mut weekends = Vec::with_capacity(53);
    while saturday.year() == year {
        weekends.push(Weekend::from_saturday(saturday)?);
        saturday = saturday
            .checked_add_days(Days::new(7))
            .ok_or(out_of_range)?;
    }
    Ok(weekends)
}
