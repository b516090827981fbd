//! Output of one generation run.

use crate::assignment::{Assignment, DutyKind};

/// The full assignment sequence for one year, in weekend order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearPlan {
    year: i32,
    assignments: Vec<Assignment>,
}

impl YearPlan {
    pub(crate) fn new(year: i32, assignments: Vec<Assignment>) -> Self {
        Self { year, assignments }
    }

    /// Returns the year this plan covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the ordered assignment sequence.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Consumes the plan and returns the assignments.
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }

    /// Iterates over the assignments of one duty class.
    pub fn of_kind(&self, kind: DutyKind) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(move |a| a.kind() == kind)
    }

    /// Returns the number of home duties in this plan.
    pub fn home_count(&self) -> usize {
        self.of_kind(DutyKind::Home).count()
    }

    /// Returns the number of cleanup duties in this plan.
    pub fn cleanup_count(&self) -> usize {
        self.of_kind(DutyKind::Cleanup).count()
    }
}
