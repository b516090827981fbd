//! Last-Friday rule and the cleanup-weekend predicate.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the last Friday of `date`'s month.
///
/// Total function: every month contains at least one Friday.
///
/// # Example
///
/// ```ignore
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(last_friday_of_month(date).day(), 29);
/// ```
pub fn last_friday_of_month(date: NaiveDate) -> NaiveDate {
    // The last day of any month is one of 28..=31.
    let mut day = (28..=31)
        .rev()
        .find_map(|d| date.with_day(d))
        .expect("every month has a day 28");
    while day.weekday() != Weekday::Fri {
        day = day.pred_opt().expect("the last Friday is within the month");
    }
    day
}

/// Reports whether `date` belongs to its month's cleanup weekend.
///
/// True iff `date` is exactly one day (Saturday) or two days (Sunday) after
/// that month's last Friday. The rotation assigner evaluates this against
/// the chosen home-duty date only, never against both weekend days; see the
/// call site in `escala-rotation`.
pub fn is_cleanup_weekend(date: NaiveDate) -> bool {
    let friday = last_friday_of_month(date);
    let saturday = friday.succ_opt();
    let sunday = saturday.and_then(|d| d.succ_opt());
    Some(date) == saturday || Some(date) == sunday
}
