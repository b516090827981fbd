//! In-memory assignment store.

use std::collections::BTreeMap;

use escala_rotation::Assignment;

use crate::error::StoreError;
use crate::store::AssignmentStore;

/// Assignment store backed by process memory, for tests and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    years: BTreeMap<i32, Vec<Assignment>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssignmentStore for MemoryStore {
    fn replace_year(&mut self, year: i32, assignments: Vec<Assignment>) -> Result<(), StoreError> {
        self.years.insert(year, assignments);
        Ok(())
    }

    fn load_year(&self, year: i32) -> Result<Vec<Assignment>, StoreError> {
        Ok(self.years.get(&year).cloned().unwrap_or_default())
    }

    fn years(&self) -> Result<Vec<i32>, StoreError> {
        Ok(self.years.keys().copied().collect())
    }
}
