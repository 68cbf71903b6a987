use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ActivityCommands, PlanCommands, ScheduleCommands};

/// Plan your weekend from the terminal
///
/// Weekendly builds weekend plans out of a catalog of activities. Added
/// activities are placed at the first free hour of their preferred time of
/// day, and plans can be checked for overlaps and pacing problems.
///
/// Running without a subcommand lists your plans.
#[derive(Parser)]
#[command(version, about, name = "weekendly")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/weekendly/weekendly.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// - `plan`: create, inspect, validate, theme and export weekend plans
/// - `activity`: browse the activity catalog and themes
/// - `schedule`: place, remove, reorder and move activities in a plan
#[derive(Subcommand)]
pub enum Commands {
    /// Manage weekend plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Browse the activity catalog
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Arrange activities within a plan
    #[command(alias = "s")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
}
