//! JSON-file assignment store: one document per year.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use escala_rotation::Assignment;

use crate::error::StoreError;
use crate::store::AssignmentStore;

/// Assignment store keeping one `escala-{year}.json` file per year under a
/// data directory.
///
/// `replace_year` rewrites the whole file, which makes regeneration
/// idempotent without a separate delete step.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("escala-{year}.json"))
    }
}

impl AssignmentStore for JsonStore {
    fn replace_year(&mut self, year: i32, assignments: Vec<Assignment>) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(year);
        let json = serde_json::to_string_pretty(&assignments)?;
        fs::write(&path, json)?;
        info!(path = %path.display(), count = assignments.len(), "year replaced");
        Ok(())
    }

    fn load_year(&self, year: i32) -> Result<Vec<Assignment>, StoreError> {
        let path = self.path_for(year);
        if !path.exists() {
            debug!(path = %path.display(), "no stored year");
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn years(&self) -> Result<Vec<i32>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut years = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(year) = name
                .strip_prefix("escala-")
                .and_then(|rest| rest.strip_suffix(".json"))
                .and_then(|digits| digits.parse::<i32>().ok())
            {
                years.push(year);
            }
        }
        years.sort_unstable();
        Ok(years)
    }
}
