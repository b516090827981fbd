//! Materialisation of rotation decisions into assignment records.

use chrono::NaiveDate;

use escala_calendar::WeekendDay;

use crate::assignment::{Assignment, DutyKind};
use crate::group::Group;

/// Builds the home-duty record for one weekend.
///
/// `weekend_idx` is the 0-based position within the year's weekend
/// sequence; the record carries it as a 1-based week number.
pub(crate) fn home(
    group: &Group,
    day: WeekendDay,
    date: NaiveDate,
    weekend_idx: usize,
    year: i32,
) -> Assignment {
    Assignment::new(
        DutyKind::Home,
        date,
        Some(weekend_idx as u32 + 1),
        year,
        group.id(),
        group.name().to_string(),
        group.members().to_vec(),
        None,
        format!("day: {day}"),
    )
}

/// Builds the cleanup-duty record for a month-end weekend.
pub(crate) fn cleanup(
    group: &Group,
    date: NaiveDate,
    reference_work_date: NaiveDate,
    year: i32,
) -> Assignment {
    Assignment::new(
        DutyKind::Cleanup,
        date,
        None,
        year,
        group.id(),
        group.name().to_string(),
        group.members().to_vec(),
        Some(reference_work_date),
        "cleanup after monthly work".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{GroupId, MemberId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn home_record_shape() {
        let group = Group::new(GroupId::new(1), "north")
            .with_members(vec![MemberId::new(4), MemberId::new(9)]);
        let a = home(&group, WeekendDay::Saturday, date(2024, 1, 6), 0, 2024);

        assert_eq!(a.kind(), DutyKind::Home);
        assert_eq!(a.date(), date(2024, 1, 6));
        assert_eq!(a.week(), Some(1));
        assert_eq!(a.year(), 2024);
        assert_eq!(a.group_id(), GroupId::new(1));
        assert_eq!(a.group_name(), "north");
        assert_eq!(a.members(), group.members());
        assert_eq!(a.reference_work_date(), None);
        assert_eq!(a.note(), "day: saturday");
    }

    #[test]
    fn cleanup_record_shape() {
        let group = Group::new(GroupId::new(2), "tent crew");
        let a = cleanup(&group, date(2024, 3, 31), date(2024, 3, 29), 2024);

        assert_eq!(a.kind(), DutyKind::Cleanup);
        assert_eq!(a.date(), date(2024, 3, 31));
        assert_eq!(a.week(), None);
        assert_eq!(a.reference_work_date(), Some(date(2024, 3, 29)));
        assert_eq!(a.note(), "cleanup after monthly work");
    }

    #[test]
    fn week_number_is_one_based() {
        let group = Group::new(GroupId::new(1), "north");
        let a = home(&group, WeekendDay::Sunday, date(2024, 1, 14), 1, 2024);
        assert_eq!(a.week(), Some(2));
        assert_eq!(a.note(), "day: sunday");
    }
}
