//! # escala-calendar
//!
//! Pure weekend arithmetic for the duty rotation scheduler.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"weekends_of_year()"| B["Vec of Weekend"]
//!     B -->|".day(WeekendDay)"| C["NaiveDate"]
//!     C -->|"last_friday_of_month()"| D["last Friday"]
//!     C -->|"is_cleanup_weekend()"| E["bool"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::{Datelike, NaiveDate};
//! use escala_calendar::{is_cleanup_weekend, last_friday_of_month, weekends_of_year};
//!
//! // Every weekend of a year, in calendar order
//! let weekends = weekends_of_year(2024)?;
//! assert_eq!(weekends[0].saturday(), NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
//!
//! // Month-end rule
//! let date = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();
//! assert_eq!(last_friday_of_month(date).day(), 29);
//! assert!(is_cleanup_weekend(date));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day` | Day-of-weekend enum |
//! | `weekend` | Weekend value object |
//! | `enumerate` | Weekend enumeration for a year |
//! | `month_end` | Last-Friday rule and cleanup-weekend predicate |
//! | `error` | Error types |

mod day;
mod enumerate;
mod error;
mod month_end;
mod weekend;

pub use day::WeekendDay;
pub use enumerate::weekends_of_year;
pub use error::CalendarError;
pub use month_end::{is_cleanup_weekend, last_friday_of_month};
pub use weekend::Weekend;
