//! Roster file: the group lists handed to the scheduler.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use escala_rotation::{Group, GroupId, MemberId, WeekendDay};

use crate::error::StoreError;

/// The registered duty groups, as read from a TOML roster file.
///
/// Home groups carry an explicit rotation order; loading sorts by it (file
/// order breaks ties), producing the ordered list the scheduler treats as
/// authoritative. Cleanup groups are ordered by name.
///
/// # File format
///
/// ```toml
/// [[home_group]]
/// id = 1
/// name = "north"
/// day = "saturday"
/// rotation_order = 1
/// members = [4, 9]
///
/// [[cleanup_group]]
/// id = 3
/// name = "tent crew"
/// members = [12]
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    #[serde(default, rename = "home_group")]
    home_groups: Vec<HomeGroupToml>,
    #[serde(default, rename = "cleanup_group")]
    cleanup_groups: Vec<CleanupGroupToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HomeGroupToml {
    id: u32,
    name: String,
    day: WeekendDay,
    #[serde(default = "default_rotation_order")]
    rotation_order: u32,
    #[serde(default)]
    members: Vec<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CleanupGroupToml {
    id: u32,
    name: String,
    #[serde(default)]
    day: Option<WeekendDay>,
    #[serde(default)]
    members: Vec<u32>,
}

fn default_rotation_order() -> u32 {
    1
}

fn members(raw: &[u32]) -> Vec<MemberId> {
    raw.iter().copied().map(MemberId::new).collect()
}

impl Roster {
    /// Loads a roster from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FileNotFound`] if `path` does not exist and
    /// [`StoreError::Toml`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path)?;
        let roster: Roster = toml::from_str(&text)?;
        debug!(
            path = %path.display(),
            n_home = roster.home_groups.len(),
            n_cleanup = roster.cleanup_groups.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    /// Returns the home groups in rotation order.
    pub fn home_groups(&self) -> Vec<Group> {
        let mut sorted: Vec<&HomeGroupToml> = self.home_groups.iter().collect();
        sorted.sort_by_key(|g| g.rotation_order);
        sorted
            .into_iter()
            .map(|g| {
                Group::new(GroupId::new(g.id), g.name.clone())
                    .with_preferred_day(g.day)
                    .with_members(members(&g.members))
            })
            .collect()
    }

    /// Returns the cleanup groups ordered by name.
    pub fn cleanup_groups(&self) -> Vec<Group> {
        let mut sorted: Vec<&CleanupGroupToml> = self.cleanup_groups.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
            .into_iter()
            .map(|g| {
                let group = Group::new(GroupId::new(g.id), g.name.clone())
                    .with_members(members(&g.members));
                match g.day {
                    Some(day) => group.with_preferred_day(day),
                    None => group,
                }
            })
            .collect()
    }
}
