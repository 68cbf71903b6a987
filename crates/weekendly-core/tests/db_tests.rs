use jiff::{civil::date, Timestamp, ToSpan};
use tempfile::NamedTempFile;
use weekendly_core::{
    Catalog, DayLabel, PlanRepository, PlannerError, SqliteRepository, WeekendPlan,
};

/// Helper function to create a temporary database for testing
fn create_test_repo() -> (NamedTempFile, SqliteRepository) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let repo = SqliteRepository::open(temp_file.path()).expect("Failed to create test database");
    (temp_file, repo)
}

fn sample_plan() -> WeekendPlan {
    let catalog = Catalog::builtin();
    let now = date(2025, 6, 4).at(12, 0, 0, 0);
    let mut plan = WeekendPlan::new("Stored weekend", true, Timestamp::UNIX_EPOCH);
    for (id, day) in [
        ("movie-night", DayLabel::Friday),
        ("brunch-cafe", DayLabel::Saturday),
        ("museum-visit", DayLabel::Saturday),
        ("spa-day", DayLabel::Sunday),
    ] {
        plan.add_activity(catalog.activity(id).unwrap(), day, None, now)
            .expect("Failed to add activity");
    }
    plan.theme_id = Some("lazy-weekend".to_string());
    plan
}

#[test]
fn test_database_initialization() {
    let (temp_file, repo) = create_test_repo();
    assert!(temp_file.path().exists());
    assert!(repo.list().expect("Failed to list plans").is_empty());

    // Opening again must not re-run or break the schema.
    SqliteRepository::open(temp_file.path()).expect("Failed to reopen database");
}

#[test]
fn test_save_and_load_round_trip() {
    let (_temp_file, repo) = create_test_repo();
    let plan = sample_plan();

    repo.save(&plan).expect("Failed to save plan");
    let loaded = repo
        .load(&plan.id)
        .expect("Failed to load plan")
        .expect("Plan should exist");

    assert_eq!(loaded, plan);
    assert_eq!(loaded.day(DayLabel::Saturday)[1].activity_id, "museum-visit");
    assert_eq!(loaded.day(DayLabel::Friday).len(), 1);
}

#[test]
fn test_save_replaces_activities() {
    let (_temp_file, repo) = create_test_repo();
    let mut plan = sample_plan();
    repo.save(&plan).expect("Failed to save plan");

    let brunch = plan.day(DayLabel::Saturday)[0].id.clone();
    plan.remove_activity(&brunch).expect("Failed to remove activity");
    plan.name = "Renamed".to_string();
    plan.touch(Timestamp::UNIX_EPOCH.checked_add(1.hour()).unwrap());
    repo.save(&plan).expect("Failed to save plan");

    let loaded = repo.load(&plan.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Renamed");
    assert_eq!(loaded.day(DayLabel::Saturday).len(), 1);
    assert_eq!(loaded.day(DayLabel::Saturday)[0].order, 0);
    assert_eq!(loaded.created_at, Timestamp::UNIX_EPOCH);
    assert_eq!(loaded, plan);
}

#[test]
fn test_list_orders_by_update_time() {
    let (_temp_file, repo) = create_test_repo();
    let older = WeekendPlan::new("Older", false, Timestamp::UNIX_EPOCH);
    let newer = WeekendPlan::new(
        "Newer",
        false,
        Timestamp::UNIX_EPOCH.checked_add(2.hours()).unwrap(),
    );
    repo.save(&older).unwrap();
    repo.save(&newer).unwrap();

    let names: Vec<String> = repo.list().unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Newer", "Older"]);
}

#[test]
fn test_delete_cascades() {
    let (temp_file, repo) = create_test_repo();
    let plan = sample_plan();
    repo.save(&plan).unwrap();

    assert!(repo.delete(&plan.id).expect("Failed to delete plan"));
    assert!(repo.load(&plan.id).unwrap().is_none());
    assert!(!repo.delete(&plan.id).unwrap());

    let conn = rusqlite::Connection::open(temp_file.path()).unwrap();
    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM scheduled_activities", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn test_open_invalid_path_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    // A directory cannot be opened as a database file.
    let err = SqliteRepository::open(temp_dir.path()).unwrap_err();
    assert!(matches!(err, PlannerError::Database { .. }));
}
