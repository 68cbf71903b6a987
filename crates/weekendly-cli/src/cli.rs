//! Command-line interface definitions and handlers.
//!
//! Argument structures use clap derives and convert into the core parameter
//! types, so clap never leaks into `weekendly-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner → Display → Renderer
//! ```
//!
//! [`Cli`] owns the planner and the renderer and runs one command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::DateTime;
use log::warn;
use weekendly_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    models::DayLabel,
    params::*,
    Planner,
};

use crate::renderer::TerminalRenderer;

/// Create a new weekend plan
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,
    /// Also plan Friday and Monday (long weekend)
    #[arg(short, long)]
    pub extended: bool,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            name: val.name,
            extended: val.extended,
        }
    }
}

/// Identify a plan
#[derive(Args)]
pub struct PlanIdArgs {
    /// Plan ID or a unique prefix of it
    pub id: String,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// Plan ID or a unique prefix of it
    pub id: String,
    /// Confirm the deletion; nothing is deleted without it
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Output format for `plan export`
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ExportFormatArg {
    /// Day-by-day plain text
    Text,
    /// JSON document with export metadata
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(val: ExportFormatArg) -> Self {
        match val {
            ExportFormatArg::Text => ExportFormat::Text,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

/// Export a plan as text or JSON
#[derive(Args)]
pub struct ExportPlanArgs {
    /// Plan ID or a unique prefix of it
    pub id: String,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormatArg::Text)]
    pub format: ExportFormatArg,
    /// Write to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Apply a weekend theme to a plan
#[derive(Args)]
pub struct ApplyThemeArgs {
    /// Plan ID or a unique prefix of it
    pub plan_id: String,
    /// Theme ID, e.g. lazy-weekend (see `activity themes`)
    pub theme_id: String,
}

impl From<ApplyThemeArgs> for ApplyTheme {
    fn from(val: ApplyThemeArgs) -> Self {
        ApplyTheme {
            plan_id: val.plan_id,
            theme_id: val.theme_id,
        }
    }
}

/// Plan management commands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plan day by day
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
    /// Check a plan for overlaps and pacing problems
    #[command(alias = "v")]
    Validate(PlanIdArgs),
    /// Export a plan
    #[command(alias = "e")]
    Export(ExportPlanArgs),
    /// Apply a theme, adding its first suggestions
    #[command(alias = "t")]
    Theme(ApplyThemeArgs),
}

/// Browse catalog activities
///
/// Criteria combine: an activity must match every given flag, and any of
/// the values within one flag.
#[derive(Args)]
pub struct ListActivitiesArgs {
    /// Category (food, outdoor, indoor, social, relax, fitness, culture,
    /// shopping, entertainment); comma-separated
    #[arg(short, long, value_delimiter = ',')]
    pub category: Vec<String>,
    /// Mood (energetic, relaxed, social, focused, adventurous, cozy);
    /// comma-separated
    #[arg(short, long, value_delimiter = ',')]
    pub mood: Vec<String>,
    /// Time of day (early-morning, morning, afternoon, evening, night);
    /// comma-separated
    #[arg(short, long, value_delimiter = ',')]
    pub time: Vec<String>,
    /// Text to find in the name, description or tags
    #[arg(short, long)]
    pub search: Option<String>,
}

impl From<ListActivitiesArgs> for ListActivities {
    fn from(val: ListActivitiesArgs) -> Self {
        ListActivities {
            categories: val.category,
            moods: val.mood,
            times: val.time,
            search: val.search,
        }
    }
}

/// Show one catalog activity
#[derive(Args)]
pub struct ShowActivityArgs {
    /// Catalog activity ID, e.g. brunch-cafe
    pub id: String,
}

impl From<ShowActivityArgs> for Id {
    fn from(val: ShowActivityArgs) -> Self {
        Id { id: val.id }
    }
}

/// Catalog commands
#[derive(Subcommand)]
pub enum ActivityCommands {
    /// List catalog activities
    #[command(aliases = ["l", "ls"])]
    List(ListActivitiesArgs),
    /// Show one activity
    #[command(alias = "s")]
    Show(ShowActivityArgs),
    /// List weekend themes
    #[command(alias = "t")]
    Themes,
}

/// Add a catalog activity to a day of a plan
#[derive(Args)]
pub struct AddActivityArgs {
    /// Plan ID or a unique prefix of it
    pub plan_id: String,
    /// Catalog activity ID, e.g. hiking-trail
    pub activity_id: String,
    /// Day: saturday, sunday, or friday/monday for long weekends
    pub day: DayLabel,
    /// Start time (e.g. 2025-06-07T14:30); defaults to the first free slot
    #[arg(long)]
    pub at: Option<DateTime>,
}

impl From<AddActivityArgs> for AddActivity {
    fn from(val: AddActivityArgs) -> Self {
        AddActivity {
            plan_id: val.plan_id,
            activity_id: val.activity_id,
            day: val.day,
            time: val.at,
        }
    }
}

/// Remove a scheduled activity from a plan
#[derive(Args)]
pub struct RemoveActivityArgs {
    /// Plan ID or a unique prefix of it
    pub plan_id: String,
    /// Scheduled activity ID or a unique prefix of it
    pub scheduled_id: String,
}

impl From<RemoveActivityArgs> for RemoveActivity {
    fn from(val: RemoveActivityArgs) -> Self {
        RemoveActivity {
            plan_id: val.plan_id,
            scheduled_id: val.scheduled_id,
        }
    }
}

/// Reorder the activities of one day
#[derive(Args)]
pub struct ReorderDayArgs {
    /// Plan ID or a unique prefix of it
    pub plan_id: String,
    /// Day to reorder
    pub day: DayLabel,
    /// Every scheduled activity ID of the day, in the new order
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl From<ReorderDayArgs> for ReorderDay {
    fn from(val: ReorderDayArgs) -> Self {
        ReorderDay {
            plan_id: val.plan_id,
            day: val.day,
            ids: val.ids,
        }
    }
}

/// Move a scheduled activity to a new start time
#[derive(Args)]
pub struct MoveActivityArgs {
    /// Plan ID or a unique prefix of it
    pub plan_id: String,
    /// Scheduled activity ID or a unique prefix of it
    pub scheduled_id: String,
    /// New start time, e.g. 2025-06-07T16:00
    pub time: DateTime,
}

impl From<MoveActivityArgs> for Reschedule {
    fn from(val: MoveActivityArgs) -> Self {
        Reschedule {
            plan_id: val.plan_id,
            scheduled_id: val.scheduled_id,
            time: val.time,
        }
    }
}

/// Scheduling commands
#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Add a catalog activity to a plan
    #[command(alias = "a")]
    Add(AddActivityArgs),
    /// Remove a scheduled activity
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveActivityArgs),
    /// Change the order of a day's activities
    #[command(alias = "o")]
    Reorder(ReorderDayArgs),
    /// Change the start time of a scheduled activity
    #[command(alias = "m")]
    Move(MoveActivityArgs),
}

/// Runs CLI commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Lists all plans; the default when no command is given.
    pub async fn list_plans(&self) -> Result<()> {
        let summaries = self
            .planner
            .list_plans()
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&summaries.to_string())
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self
                    .planner
                    .create_plan(&args.into())
                    .await
                    .context("Failed to create plan")?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let plan = self
                    .planner
                    .find_plan(&args.into())
                    .await
                    .context("Failed to load plan")?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Delete(args) => {
                let plan = self
                    .planner
                    .delete_plan(&args.into())
                    .await
                    .context("Failed to delete plan")?;
                self.renderer.render(&DeleteResult::new(plan).to_string())
            }
            PlanCommands::Validate(args) => {
                let report = self
                    .planner
                    .validate_plan(&args.into())
                    .await
                    .context("Failed to validate plan")?;
                if !report.is_valid() {
                    warn!(
                        "Plan {} has {} scheduling conflict(s)",
                        report.plan.id,
                        report.validation.conflict_count()
                    );
                }
                self.renderer.render(&report.to_string())
            }
            PlanCommands::Export(args) => self.export_plan(args).await,
            PlanCommands::Theme(args) => {
                let theme_id = args.theme_id.clone();
                let plan = self
                    .planner
                    .apply_theme(&args.into())
                    .await
                    .context("Failed to apply theme")?;
                let change = format!("Applied theme {theme_id}");
                self.renderer
                    .render(&UpdateResult::with_changes(plan, vec![change]).to_string())
            }
        }
    }

    async fn export_plan(&self, args: ExportPlanArgs) -> Result<()> {
        let params = ExportPlan {
            id: args.id,
            format: args.format.into(),
        };
        let exported = self
            .planner
            .export_plan(&params)
            .await
            .context("Failed to export plan")?;

        match args.output {
            Some(path) => {
                std::fs::write(&path, &exported)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                self.renderer.render(
                    &OperationStatus::success(format!("Exported plan to {}", path.display()))
                        .to_string(),
                )
            }
            None => self.renderer.raw(&exported),
        }
    }

    pub fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::List(args) => {
                let activities = self
                    .planner
                    .list_activities(&args.into())
                    .context("Invalid activity filter")?;
                self.renderer.render(&activities.to_string())
            }
            ActivityCommands::Show(args) => {
                let activity = self
                    .planner
                    .get_activity(&args.into())
                    .context("Failed to find activity")?;
                self.renderer.render(&activity.to_string())
            }
            ActivityCommands::Themes => self.renderer.render(&self.planner.themes().to_string()),
        }
    }

    pub async fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Add(args) => {
                let placed = self
                    .planner
                    .add_activity(&args.into())
                    .await
                    .context("Failed to add activity")?;
                self.renderer.render(&CreateResult::new(placed).to_string())
            }
            ScheduleCommands::Remove(args) => {
                let removed = self
                    .planner
                    .remove_activity(&args.into())
                    .await
                    .context("Failed to remove activity")?;
                self.renderer.render(&DeleteResult::new(removed).to_string())
            }
            ScheduleCommands::Reorder(args) => {
                let day = args.day;
                let plan = self
                    .planner
                    .reorder_day(&args.into())
                    .await
                    .context("Failed to reorder activities")?;
                let change = format!("Reordered {day}");
                self.renderer
                    .render(&UpdateResult::with_changes(plan, vec![change]).to_string())
            }
            ScheduleCommands::Move(args) => {
                let moved = self
                    .planner
                    .reschedule_activity(&args.into())
                    .await
                    .context("Failed to move activity")?;
                self.renderer
                    .render(&UpdateResult::with_changes(moved, Vec::new()).to_string())
            }
        }
    }
}
