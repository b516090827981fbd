//! # escala-store
//!
//! Persistence boundary for generated duty assignments.
//!
//! The scheduler core only emits; this crate owns the side effects. A new
//! generation run replaces a whole year atomically from the caller's point
//! of view: [`AssignmentStore::replace_year`] is a single idempotent
//! operation, so the core never reasons about deletion.
//!
//! Two implementations are provided: [`MemoryStore`] for tests and
//! ephemeral use, and [`JsonStore`] keeping one JSON document per year on
//! disk. [`Roster`] loads the group lists from a TOML file and hands them
//! to the core in rotation order.
//!
//! # Quick start
//!
//! ```ignore
//! use escala_store::{AssignmentStore, JsonStore, Roster};
//!
//! let roster = Roster::load("roster.toml")?;
//! let plan = escala_rotation::assign_year(&roster.home_groups(), &roster.cleanup_groups(), 2024)?;
//! let mut store = JsonStore::new("data");
//! store.replace_year(2024, plan.into_assignments())?;
//! ```

mod error;
mod json;
mod memory;
mod roster;
mod store;

pub use error::StoreError;
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use roster::Roster;
pub use store::AssignmentStore;
