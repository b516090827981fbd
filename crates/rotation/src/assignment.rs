//! Assignment records emitted by one generation run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::group::{GroupId, MemberId};

/// The two duty classes of the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DutyKind {
    /// The primary rotating weekend duty.
    Home,
    /// The secondary, month-end-triggered duty.
    Cleanup,
}

impl std::fmt::Display for DutyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Cleanup => write!(f, "cleanup"),
        }
    }
}

/// One duty instance, the write-once output of a generation run.
///
/// The group name and member list are snapshots captured at generation
/// time; later renames or membership changes do not alter stored
/// assignments. They are historical facts, not live views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    kind: DutyKind,
    date: NaiveDate,
    /// 1-based weekend number within the year; home duties only.
    week: Option<u32>,
    year: i32,
    group_id: GroupId,
    group_name: String,
    members: Vec<MemberId>,
    /// Last Friday of the relevant month; cleanup duties only.
    reference_work_date: Option<NaiveDate>,
    note: String,
}

impl Assignment {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        kind: DutyKind,
        date: NaiveDate,
        week: Option<u32>,
        year: i32,
        group_id: GroupId,
        group_name: String,
        members: Vec<MemberId>,
        reference_work_date: Option<NaiveDate>,
        note: String,
    ) -> Self {
        Self {
            kind,
            date,
            week,
            year,
            group_id,
            group_name,
            members,
            reference_work_date,
            note,
        }
    }

    /// Returns the duty class.
    pub fn kind(&self) -> DutyKind {
        self.kind
    }

    /// Returns the calendar date the duty falls on.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the 1-based weekend number, present on home duties.
    pub fn week(&self) -> Option<u32> {
        self.week
    }

    /// Returns the year this assignment was generated for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the owning group's identifier.
    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Returns the owning group's name as captured at generation time.
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Returns the member snapshot captured at generation time.
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    /// Returns the last Friday of the relevant month, present on cleanup
    /// duties.
    pub fn reference_work_date(&self) -> Option<NaiveDate> {
        self.reference_work_date
    }

    /// Returns the human-readable note.
    pub fn note(&self) -> &str {
        &self.note
    }
}
