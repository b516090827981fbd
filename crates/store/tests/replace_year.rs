use std::fs;

use escala_rotation::{assign_year, DutyKind};
use escala_store::{AssignmentStore, JsonStore, Roster};

const ROSTER: &str = r#"
[[home_group]]
id = 1
name = "north"
day = "saturday"
rotation_order = 1
members = [4, 9]

[[home_group]]
id = 2
name = "south"
day = "sunday"
rotation_order = 2

[[cleanup_group]]
id = 3
name = "tent crew"
members = [12]
"#;

#[test]
fn roster_to_store_pipeline() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let roster_path = dir.path().join("roster.toml");
    fs::write(&roster_path, ROSTER).unwrap();

    let roster = Roster::load(&roster_path).unwrap();
    let plan = assign_year(&roster.home_groups(), &roster.cleanup_groups(), 2024).unwrap();
    let home = plan.home_count();
    let cleanup = plan.cleanup_count();
    assert_eq!(home, 52);
    assert!(cleanup > 0);

    let data_dir = dir.path().join("data");
    let mut store = JsonStore::new(&data_dir);
    store.replace_year(2024, plan.into_assignments()).unwrap();

    let stored = store.load_year(2024).unwrap();
    assert_eq!(stored.len(), home + cleanup);
    assert_eq!(store.years().unwrap(), vec![2024]);

    // Regenerating the same year leaves exactly one year's worth behind.
    let roster = Roster::load(&roster_path).unwrap();
    let plan = assign_year(&roster.home_groups(), &roster.cleanup_groups(), 2024).unwrap();
    store.replace_year(2024, plan.into_assignments()).unwrap();
    assert_eq!(store.load_year(2024).unwrap().len(), home + cleanup);
    assert_eq!(store.years().unwrap(), vec![2024]);
}

#[test]
fn stored_assignments_survive_a_fresh_store_handle() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let roster_path = dir.path().join("roster.toml");
    fs::write(&roster_path, ROSTER).unwrap();

    let roster = Roster::load(&roster_path).unwrap();
    let plan = assign_year(&roster.home_groups(), &roster.cleanup_groups(), 2025).unwrap();
    let expected = plan.assignments().to_vec();

    let mut store = JsonStore::new(dir.path().join("data"));
    store.replace_year(2025, plan.into_assignments()).unwrap();

    // A separate handle reads the same records back, snapshots intact.
    let reader = JsonStore::new(dir.path().join("data"));
    let stored = reader.load_year(2025).unwrap();
    assert_eq!(stored, expected);
    for a in stored.iter().filter(|a| a.kind() == DutyKind::Cleanup) {
        assert!(a.reference_work_date().is_some());
        assert_eq!(a.group_name(), "tent crew");
    }
}
