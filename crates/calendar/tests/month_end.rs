use chrono::{Datelike, NaiveDate, Weekday};
use escala_calendar::{is_cleanup_weekend, last_friday_of_month, weekends_of_year};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn last_friday_over_many_months() {
    for year in 1995..=2030 {
        for month in 1..=12u32 {
            let friday = last_friday_of_month(date(year, month, 1));
            assert_eq!(friday.weekday(), Weekday::Fri);
            assert_eq!((friday.year(), friday.month()), (year, month));
        }
    }
}

#[test]
fn at_most_one_cleanup_saturday_per_month() {
    // Testing every Saturday of a year against the rule marks at most one
    // Saturday per month.
    for year in [2022, 2023, 2024] {
        let mut per_month = [0u32; 12];
        for weekend in weekends_of_year(year).unwrap() {
            if is_cleanup_weekend(weekend.saturday()) {
                per_month[weekend.saturday().month0() as usize] += 1;
            }
        }
        for (idx, count) in per_month.iter().enumerate() {
            assert!(*count <= 1, "year {year} month {} has {count}", idx + 1);
        }
    }
}

#[test]
fn march_2024_known_dates() {
    assert_eq!(last_friday_of_month(date(2024, 3, 30)), date(2024, 3, 29));
    assert!(is_cleanup_weekend(date(2024, 3, 30)));
    assert!(!is_cleanup_weekend(date(2024, 3, 23)));
}
