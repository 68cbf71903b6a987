use jiff::civil::date;
use tempfile::TempDir;
use weekendly_core::{Clock, Planner, PlannerBuilder};

/// Wednesday 2025-06-04 at noon.
pub fn wednesday_noon() -> Clock {
    Clock::Fixed(date(2025, 6, 4).at(12, 0, 0, 0))
}

/// Helper function to create a test planner backed by a temporary database
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(wednesday_noon())
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
