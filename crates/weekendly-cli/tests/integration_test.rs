//! Integration tests comparing CLI output with the core Display
//! implementations.
//!
//! The CLI renders the same markdown the core types produce, so with
//! `--no-color` its output must match `to_string()` on the values loaded
//! directly through a planner sharing the database file.

use std::process::Command;

use tempfile::TempDir;
use weekendly_core::{
    display::ValidationReport,
    models::DayLabel,
    params::{AddActivity, CreatePlan, ExportFormat, ExportPlan, Id, ListActivities},
    Planner, PlannerBuilder,
};

/// Helper function to create a test planner with temporary database
async fn create_test_planner() -> (Planner, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    (planner, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(temp_dir: &TempDir, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_weekendly"));
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("test.db"));

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    assert!(output.status.success(), "CLI command {args:?} failed");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

async fn seeded_plan(planner: &Planner) -> String {
    let plan = planner
        .create_plan(&CreatePlan {
            name: "Integration Weekend".to_string(),
            extended: true,
        })
        .await
        .expect("Failed to create plan");

    for (activity_id, day) in [
        ("brunch-cafe", DayLabel::Saturday),
        ("museum-visit", DayLabel::Saturday),
        ("movie-night", DayLabel::Friday),
    ] {
        planner
            .add_activity(&AddActivity {
                plan_id: plan.id.clone(),
                activity_id: activity_id.to_string(),
                day,
                time: None,
            })
            .await
            .expect("Failed to add activity");
    }

    plan.id
}

#[tokio::test]
async fn test_plan_show_matches_display() {
    let (planner, temp_dir) = create_test_planner().await;
    let plan_id = seeded_plan(&planner).await;

    let plan = planner
        .find_plan(&Id { id: plan_id.clone() })
        .await
        .expect("Failed to load plan");

    let cli_output = run_cli_command(&temp_dir, &["plan", "show", &plan_id]);
    assert_eq!(cli_output, plan.to_string());
}

#[tokio::test]
async fn test_plan_list_matches_display() {
    let (planner, temp_dir) = create_test_planner().await;
    seeded_plan(&planner).await;

    let summaries = planner.list_plans().await.expect("Failed to list plans");

    let cli_output = run_cli_command(&temp_dir, &["plan", "list"]);
    assert_eq!(cli_output, summaries.to_string());
    assert!(cli_output.contains("Integration Weekend"));
}

#[tokio::test]
async fn test_validate_matches_report() {
    let (planner, temp_dir) = create_test_planner().await;
    let plan_id = seeded_plan(&planner).await;

    let report = planner
        .validate_plan(&Id { id: plan_id.clone() })
        .await
        .expect("Failed to validate plan");
    let plan = planner
        .find_plan(&Id { id: plan_id.clone() })
        .await
        .expect("Failed to load plan");

    let cli_output = run_cli_command(&temp_dir, &["plan", "validate", &plan_id]);
    assert_eq!(cli_output, report.to_string());
    assert_eq!(cli_output, ValidationReport::new(plan).to_string());
}

#[tokio::test]
async fn test_text_export_matches_planner_export() {
    let (planner, temp_dir) = create_test_planner().await;
    let plan_id = seeded_plan(&planner).await;

    let exported = planner
        .export_plan(&ExportPlan {
            id: plan_id.clone(),
            format: ExportFormat::Text,
        })
        .await
        .expect("Failed to export plan");

    let cli_output = run_cli_command(&temp_dir, &["plan", "export", &plan_id]);
    assert_eq!(cli_output, format!("{exported}\n"));
    assert!(exported.contains("FRIDAY\n17:00 - Movie Night (150min)"));
}

#[tokio::test]
async fn test_activity_list_matches_display() {
    let (planner, temp_dir) = create_test_planner().await;

    let params = ListActivities {
        categories: vec!["culture".to_string()],
        ..Default::default()
    };
    let activities = planner
        .list_activities(&params)
        .expect("Failed to list activities");

    let cli_output = run_cli_command(&temp_dir, &["activity", "list", "--category", "culture"]);
    assert_eq!(cli_output, activities.to_string());
    assert!(cli_output.contains("Museum Visit"));
    assert_eq!(
        run_cli_command(&temp_dir, &["activity", "themes"]),
        planner.themes().to_string()
    );
}
