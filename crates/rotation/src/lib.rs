//! # escala-rotation
//!
//! Year assignment for the weekend duty rotation: round-robin home duties
//! plus month-end cleanup duties, computed as a pure function of the group
//! lists and the target year.
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────────┐     ┌───────────────────┐     ┌──────────────────┐
//!  │ Weekend list   │────▶│ Rotation assigner │────▶│ Assignment       │
//!  │ (calendar)     │     │ (home + cleanup)  │     │ records (plan)   │
//!  └────────────────┘     └───────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use escala_rotation::{Group, GroupId, assign_year};
//!
//! let home = vec![Group::new(GroupId::new(1), "north")];
//! let cleanup = vec![Group::new(GroupId::new(2), "tent crew")];
//! let plan = assign_year(&home, &cleanup, 2024)?;
//! assert_eq!(plan.home_count(), 52);
//! ```

mod assign;
mod assignment;
mod emit;
mod error;
mod group;
mod plan;

pub use assign::assign_year;
pub use assignment::{Assignment, DutyKind};
pub use error::RotationError;
pub use group::{Group, GroupId, MemberId};
pub use plan::YearPlan;
pub use escala_calendar::WeekendDay;
