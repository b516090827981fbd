//! The rotation assigner: home round-robin plus month-end cleanup.

use chrono::Datelike;
use tracing::{debug, info};

use escala_calendar::{is_cleanup_weekend, last_friday_of_month, weekends_of_year, WeekendDay};

use crate::emit;
use crate::error::RotationError;
use crate::group::Group;
use crate::plan::YearPlan;

/// Assigns every weekend of `year`.
///
/// Home duties rotate through `home_groups` by weekend position (index
/// modulo group count); the input order is the rotation order. On a
/// month-end cleanup weekend, a cleanup duty goes to one of
/// `cleanup_groups` — selected by month index modulo the eligible count,
/// where the group holding that weekend's home duty is never eligible.
///
/// Day placement: a home duty falls on the group's preferred weekend day
/// (Saturday when unset); a cleanup duty falls on its group's preferred
/// day, defaulting to the day opposite the home duty. The cleanup rule is
/// evaluated against the chosen home-duty date only, so a month-end
/// weekend whose qualifying day is the one the home rotation did not pick
/// is skipped.
///
/// Pure function: identical inputs yield an identical plan.
///
/// # Errors
///
/// Returns [`RotationError::NoHomeGroups`] when `home_groups` is empty and
/// [`RotationError::Calendar`] when `year` cannot be represented. Empty
/// `cleanup_groups` is not an error; cleanup is skipped for every weekend.
#[tracing::instrument(skip_all, fields(year, n_home = home_groups.len(), n_cleanup = cleanup_groups.len()))]
pub fn assign_year(
    home_groups: &[Group],
    cleanup_groups: &[Group],
    year: i32,
) -> Result<YearPlan, RotationError> {
    if home_groups.is_empty() {
        return Err(RotationError::NoHomeGroups);
    }

    let weekends = weekends_of_year(year)?;
    let mut assignments = Vec::with_capacity(weekends.len() * 2);

    for (weekend_idx, weekend) in weekends.iter().enumerate() {
        let home = &home_groups[weekend_idx % home_groups.len()];
        let home_day = home.preferred_day().unwrap_or(WeekendDay::Saturday);
        let home_date = weekend.day(home_day);
        assignments.push(emit::home(home, home_day, home_date, weekend_idx, year));

        if !is_cleanup_weekend(home_date) || cleanup_groups.is_empty() {
            continue;
        }

        // A group never holds both duties on the same weekend.
        let eligible: Vec<&Group> = cleanup_groups
            .iter()
            .filter(|g| g.id() != home.id())
            .collect();
        if eligible.is_empty() {
            debug!(weekend = weekend_idx, "no eligible cleanup group, skipping");
            continue;
        }

        let month_idx = home_date.month0() as usize;
        let cleanup = eligible[month_idx % eligible.len()];
        let cleanup_day = cleanup.preferred_day().unwrap_or(home_day.opposite());
        let cleanup_date = weekend.day(cleanup_day);
        let reference = last_friday_of_month(cleanup_date);
        debug!(
            weekend = weekend_idx,
            group = %cleanup.id(),
            date = %cleanup_date,
            "cleanup weekend"
        );
        assignments.push(emit::cleanup(cleanup, cleanup_date, reference, year));
    }

    let plan = YearPlan::new(year, assignments);
    info!(
        home = plan.home_count(),
        cleanup = plan.cleanup_count(),
        "year assigned"
    );
    Ok(plan)
}
