//! High-level planner API for managing weekend plans.
//!
//! [`Planner`] is the single entry point interfaces talk to. It owns the
//! activity [`Catalog`], a [`PlanRepository`] and a [`Clock`], and turns each
//! request into a load-mutate-save cycle on a blocking worker thread.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │  WeekendPlan    │    │   Repository    │
//! │ (plan_ops,      │───▶│  + scheduling   │───▶│ (SQLite or in   │
//! │  schedule_ops)  │    │    engine       │    │  memory)        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Plan lifecycle, validation, themes and export
//! - [`schedule_ops`]: Adding, removing, reordering and moving activities
//! - [`catalog_ops`]: Read-only catalog queries
//!
//! # Usage Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use weekendly_core::{
//!     models::DayLabel,
//!     params::{AddActivity, CreatePlan},
//!     planner::{Clock, PlannerBuilder},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .in_memory()
//!     .with_clock(Clock::Fixed(date(2025, 6, 4).at(12, 0, 0, 0)))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan { name: "Lazy weekend".to_string(), extended: false })
//!     .await?;
//!
//! let placed = planner
//!     .add_activity(&AddActivity {
//!         plan_id: plan.id.clone(),
//!         activity_id: "brunch-cafe".to_string(),
//!         day: DayLabel::Saturday,
//!         time: None,
//!     })
//!     .await?;
//! assert_eq!(placed.scheduled_time, date(2025, 6, 7).at(9, 0, 0, 0));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::{civil::DateTime, tz::TimeZone, Timestamp, Zoned};
use tokio::task;

use crate::{
    catalog::Catalog,
    error::{PlannerError, Result},
    models::WeekendPlan,
    repository::PlanRepository,
};

pub mod builder;
pub mod catalog_ops;
pub mod plan_ops;
pub mod schedule_ops;


pub use builder::PlannerBuilder;

/// Source of the current time.
///
/// Slot assignment is relative to "now", so tests pin it with
/// [`Clock::Fixed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Local wall-clock time of the system time zone
    #[default]
    System,
    /// Always the given local date and time, interpreted as UTC for
    /// timestamps
    Fixed(DateTime),
}

impl Clock {
    /// Current local date and time.
    pub fn now(&self) -> DateTime {
        match self {
            Clock::System => Zoned::now().datetime(),
            Clock::Fixed(datetime) => *datetime,
        }
    }

    /// Current instant, used for `created_at` and `updated_at`.
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Clock::System => Timestamp::now(),
            Clock::Fixed(datetime) => datetime
                .to_zoned(TimeZone::UTC)
                .map(|zoned| zoned.timestamp())
                .unwrap_or(Timestamp::UNIX_EPOCH),
        }
    }
}

/// Main planner interface for managing weekend plans.
#[derive(Clone)]
pub struct Planner {
    pub(crate) repository: Arc<dyn PlanRepository>,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) clock: Clock,
}

impl Planner {
    pub(crate) fn new(repository: Arc<dyn PlanRepository>, catalog: Catalog, clock: Clock) -> Self {
        Self {
            repository,
            catalog: Arc::new(catalog),
            clock,
        }
    }

    /// The activity catalog this planner schedules from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The clock used for slot assignment and timestamps.
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Runs repository work on the blocking thread pool.
    async fn blocking<T, F>(&self, work: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn PlanRepository) -> Result<T> + Send + 'static,
    {
        let repository = Arc::clone(&self.repository);
        task::spawn_blocking(move || work(repository.as_ref()))
            .await
            .map_err(PlannerError::join)?
    }

    /// Loads a plan by ID or unique ID prefix, applies `mutate`, stamps
    /// `updated_at` and saves it, all on one worker thread.
    ///
    /// Nothing is saved when `mutate` fails.
    async fn update_plan<T, F>(&self, plan_ref: &str, mutate: F) -> Result<(WeekendPlan, T)>
    where
        T: Send + 'static,
        F: FnOnce(&mut WeekendPlan, &Catalog, DateTime) -> Result<T> + Send + 'static,
    {
        let plan_ref = plan_ref.to_string();
        let catalog = Arc::clone(&self.catalog);
        let clock = self.clock;

        self.blocking(move |repository| {
            let mut plan = resolve_plan(repository, &plan_ref)?;
            let output = mutate(&mut plan, &catalog, clock.now())?;
            plan.touch(clock.timestamp());
            repository.save(&plan)?;
            Ok((plan, output))
        })
        .await
    }
}

/// Finds a plan by exact ID, falling back to a unique ID prefix.
pub(crate) fn resolve_plan(repository: &dyn PlanRepository, plan_ref: &str) -> Result<WeekendPlan> {
    if let Some(plan) = repository.load(plan_ref)? {
        return Ok(plan);
    }

    let mut matches: Vec<WeekendPlan> = repository
        .list()?
        .into_iter()
        .filter(|plan| !plan_ref.is_empty() && plan.id.starts_with(plan_ref))
        .collect();

    match matches.len() {
        0 => Err(PlannerError::PlanNotFound {
            id: plan_ref.to_string(),
        }),
        1 => Ok(matches.remove(0)),
        n => Err(PlannerError::invalid_input("id")
            .with_reason(format!("'{plan_ref}' matches {n} plans; use more characters"))),
    }
}
