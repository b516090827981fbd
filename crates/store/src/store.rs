//! The assignment store trait.

use escala_rotation::Assignment;

use crate::error::StoreError;

/// Persistence boundary for generated assignments.
///
/// Regeneration is modelled as one idempotent operation per year: the core
/// emits a full year and [`replace_year`](Self::replace_year) swaps it in,
/// discarding whatever was stored for that year before. Callers that can
/// regenerate the same year from several places must serialise those calls
/// themselves; the store does not lock across processes.
pub trait AssignmentStore {
    /// Replaces every stored assignment of `year` with `assignments`.
    fn replace_year(&mut self, year: i32, assignments: Vec<Assignment>) -> Result<(), StoreError>;

    /// Loads the stored assignments of `year`, in stored order.
    ///
    /// A year that was never generated yields an empty list, not an error.
    fn load_year(&self, year: i32) -> Result<Vec<Assignment>, StoreError>;

    /// Lists the years with stored assignments, ascending.
    fn years(&self) -> Result<Vec<i32>, StoreError>;
}
