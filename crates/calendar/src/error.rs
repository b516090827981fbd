//! Error types for the escala-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the escala-calendar crate.
///
/// This enum covers years that cannot be represented as calendar dates and
/// weekend construction from a date that is not a Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year falls outside the representable date range.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The year that could not be represented.
        year: i32,
    },

    /// Returned when a weekend is constructed from a non-Saturday date.
    #[error("not a Saturday: {date}")]
    NotASaturday {
        /// The date that was supplied.
        date: NaiveDate,
    },
}
