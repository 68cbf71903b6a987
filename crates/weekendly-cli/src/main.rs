//! Weekendly CLI application
//!
//! Command-line interface for planning weekends with the weekendly-core
//! scheduling engine.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use weekendly_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Weekendly started");

    let cli = Cli::new(planner, renderer);
    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Activity { command }) => cli.handle_activity_command(command),
        Some(Schedule { command }) => cli.handle_schedule_command(command).await,
        None => cli.list_plans().await,
    }
}
