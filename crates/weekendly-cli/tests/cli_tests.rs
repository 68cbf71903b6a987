use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a test database
fn weekendly_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("weekendly").expect("Failed to find weekendly binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn stdout_of(cmd: &mut Command, args: &[&str]) -> String {
    let output = cmd.args(args).output().expect("Failed to run weekendly");
    assert!(output.status.success(), "command {args:?} failed: {output:?}");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

/// Creates a plan and returns its ID.
fn create_plan(temp_dir: &TempDir, name: &str, extra: &[&str]) -> String {
    let mut args = vec!["plan", "create", name];
    args.extend_from_slice(extra);
    let output = stdout_of(&mut weekendly_cmd(temp_dir), &args);
    output
        .lines()
        .find_map(|line| line.strip_prefix("Created plan with ID: "))
        .expect("plan ID in output")
        .trim()
        .to_string()
}

/// Schedules an activity and returns the short scheduled ID.
fn schedule(temp_dir: &TempDir, plan_id: &str, activity: &str, day: &str) -> String {
    let output = stdout_of(
        &mut weekendly_cmd(temp_dir),
        &["schedule", "add", plan_id, activity, day],
    );
    let start = output.rfind("(ID: ").expect("scheduled ID in output") + "(ID: ".len();
    output[start..].trim_end().trim_end_matches(')').to_string()
}

#[test]
fn test_cli_create_plan_success() {
    let temp_dir = create_cli_test_environment();

    weekendly_cmd(&temp_dir)
        .args(["plan", "create", "Beach Weekend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: "))
        .stdout(predicate::str::contains("# Beach Weekend"))
        .stdout(predicate::str::contains("## Saturday"))
        .stdout(predicate::str::contains("No activities planned"))
        .stdout(predicate::str::contains("## Friday").not());
}

#[test]
fn test_cli_create_extended_plan_shows_all_days() {
    let temp_dir = create_cli_test_environment();

    weekendly_cmd(&temp_dir)
        .args(["plan", "create", "Long Weekend", "--extended"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Friday"))
        .stdout(predicate::str::contains("## Monday"))
        .stdout(predicate::str::contains("Long weekend: yes"));
}

#[test]
fn test_cli_create_plan_blank_name_fails() {
    let temp_dir = create_cli_test_environment();

    weekendly_cmd(&temp_dir)
        .args(["plan", "create", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create plan"));
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = create_cli_test_environment();

    weekendly_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_default_command_lists_plans() {
    let temp_dir = create_cli_test_environment();
    create_plan(&temp_dir, "Default Listing", &[]);

    weekendly_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Default Listing"));
}

#[test]
fn test_cli_schedule_add_assigns_morning_slot() {
    let temp_dir = create_cli_test_environment();
    let plan_id = create_plan(&temp_dir, "Morning", &[]);

    weekendly_cmd(&temp_dir)
        .args(["schedule", "add", &plan_id[..8], "nature-walk", "sat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scheduled Nature Walk on saturday at"))
        .stdout(predicate::str::contains("09:00"));

    weekendly_cmd(&temp_dir)
        .args(["schedule", "add", &plan_id, "nature-walk", "saturday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10:00"));

    weekendly_cmd(&temp_dir)
        .args(["plan", "show", &plan_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("**09:00-10:00** Nature Walk"))
        .stdout(predicate::str::contains("**10:00-11:00** Nature Walk"));
}

#[test]
fn test_cli_schedule_add_explicit_time() {
    let temp_dir = create_cli_test_environment();
    let plan_id = create_plan(&temp_dir, "Explicit", &[]);

    weekendly_cmd(&temp_dir)
        .args([
            "schedule",
            "add",
            &plan_id,
            "spa-day",
            "sunday",
            "--at",
            "2025-06-08T13:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun 2025-06-08 13:30"));
}

#[test]
fn test_cli_schedule_add_friday_requires_extended_plan() {
    let temp_dir = create_cli_test_environment();
    let plan_id = create_plan(&temp_dir, "Short", &[]);

    weekendly_cmd(&temp_dir)
        .args(["schedule", "add", &plan_id, "movie-night", "friday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("extended"));
}

#[test]
fn test_cli_schedule_add_unknown_activity() {
    let temp_dir = create_cli_test_environment();
    let plan_id = create_plan(&temp_dir, "Unknown", &[]);

    weekendly_cmd(&temp_dir)
        .args(["schedule", "add", &plan_id, "skydiving", "saturday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Activity 'skydiving' not found"));
}

#[test]
fn test_cli_move_and_validate_reports_conflict() {
    let temp_dir = create_cli_test_environment();
    let plan_id = create_plan(&temp_dir, "Clash", &[]);
    schedule(&temp_dir, &plan_id, "museum-visit", "saturday");
    let gallery = schedule(&temp_dir, &plan_id, "art-gallery", "saturday");

    weekendly_cmd(&temp_dir)
        .args(["plan", "validate", &plan_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No conflicts found."));

    // Any Saturday date works; only the hours matter for validation
    let show = stdout_of(&mut weekendly_cmd(&temp_dir), &["plan", "show", &plan_id]);
    let date = show
        .lines()
        .find_map(|line| line.strip_prefix("## Saturday ("))
        .map(|rest| rest.trim_end_matches(')').to_string())
        .expect("Saturday date in plan output");

    weekendly_cmd(&temp_dir)
        .args(["schedule", "move", &plan_id, &gallery, &format!("{date}T10:00")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Art Gallery Tour now starts"));

    weekendly_cmd(&temp_dir)
        .args(["plan", "validate", &plan_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 conflict(s)."))
        .stdout(predicate::str::contains(
            "Museum Visit and Art Gallery Tour: Time overlap detected",
        ));
}

#[test]
fn test_cli_remove_and_reorder() {
    let temp_dir = create_cli_test_environment();
    let plan_id = create_plan(&temp_dir, "Shuffle", &[]);
    let yoga = schedule(&temp_dir, &plan_id, "sunrise-yoga", "sunday");
    let brunch = schedule(&temp_dir, &plan_id, "brunch-cafe", "sunday");

    weekendly_cmd(&temp_dir)
        .args(["schedule", "reorder", &plan_id, "sunday", &brunch, &yoga])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reordered sunday"));

    weekendly_cmd(&temp_dir)
        .args(["schedule", "reorder", &plan_id, "sunday", &brunch])
        .assert()
        .failure();

    weekendly_cmd(&temp_dir)
        .args(["schedule", "remove", &plan_id, &yoga])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Sunrise Yoga from sunday"));

    weekendly_cmd(&temp_dir)
        .args(["plan", "show", &plan_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunrise Yoga").not());
}

#[test]
fn test_cli_theme_and_export() {
    let temp_dir = create_cli_test_environment();
    let plan_id = create_plan(&temp_dir, "Themed", &[]);

    weekendly_cmd(&temp_dir)
        .args(["plan", "theme", &plan_id, "lazy-weekend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied theme lazy-weekend"))
        .stdout(predicate::str::contains("Brunch at a Café"))
        .stdout(predicate::str::contains("Spa Day"));

    weekendly_cmd(&temp_dir)
        .args(["plan", "export", &plan_id])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Weekend Plan - Themed\n"))
        .stdout(predicate::str::contains("SATURDAY\n09:00 - Brunch at a Café (90min)"))
        .stdout(predicate::str::contains("Generated by Weekendly"));

    let json = stdout_of(
        &mut weekendly_cmd(&temp_dir),
        &["plan", "export", &plan_id, "--format", "json"],
    );
    assert!(json.contains("\"version\": \"1.0\""));
    assert!(json.contains("\"theme_id\": \"lazy-weekend\""));

    let out_file = temp_dir.path().join("plan.txt");
    weekendly_cmd(&temp_dir)
        .args(["plan", "export", &plan_id, "--output", out_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported plan to"));
    let written = std::fs::read_to_string(&out_file).unwrap();
    assert!(written.ends_with("Generated by Weekendly"));
}

#[test]
fn test_cli_theme_unknown() {
    let temp_dir = create_cli_test_environment();
    let plan_id = create_plan(&temp_dir, "Nope", &[]);

    weekendly_cmd(&temp_dir)
        .args(["plan", "theme", &plan_id, "busy-weekend"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Theme 'busy-weekend' not found"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let plan_id = create_plan(&temp_dir, "Doomed", &[]);

    weekendly_cmd(&temp_dir)
        .args(["plan", "delete", &plan_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmed"));

    weekendly_cmd(&temp_dir)
        .args(["plan", "delete", &plan_id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted plan 'Doomed'"));

    weekendly_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_activity_list_filters() {
    let temp_dir = create_cli_test_environment();

    weekendly_cmd(&temp_dir)
        .args(["activity", "list", "--category", "fitness", "--mood", "energetic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("City Cycling Tour"))
        .stdout(predicate::str::contains("Rock Climbing Gym"))
        .stdout(predicate::str::contains("Sunrise Yoga").not());

    weekendly_cmd(&temp_dir)
        .args(["activity", "list", "--search", "vineyard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wine Tasting"));

    weekendly_cmd(&temp_dir)
        .args(["activity", "list", "--time", "midnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time of day: midnight"));
}

#[test]
fn test_cli_activity_show_and_themes() {
    let temp_dir = create_cli_test_environment();

    weekendly_cmd(&temp_dir)
        .args(["activity", "show", "hiking-trail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Hiking Trail (hiking-trail)"))
        .stdout(predicate::str::contains("- Best time: early_morning, morning"));

    weekendly_cmd(&temp_dir)
        .args(["activity", "themes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Foodie Weekend"));
}
