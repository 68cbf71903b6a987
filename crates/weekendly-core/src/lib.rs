//! Core library for Weekendly, a weekend activity planner.
//!
//! The heart of the crate is the [`scheduling`] engine: a time slot assigner
//! that places an activity into the first free hour of its preferred windows,
//! and a validator that reports overlaps and buffer suggestions for a day.
//! Around it sit the plan [`models`], the built-in activity [`catalog`],
//! plan storage ([`repository`], [`db`]) and the async [`Planner`] facade.
//!
//! # Display Architecture
//!
//! Models implement [`std::fmt::Display`] as markdown; [`display`] adds
//! collection and result wrappers plus text/JSON export. The CLI renders that
//! markdown in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use weekendly_core::{
//!     models::DayLabel,
//!     params::{AddActivity, CreatePlan, Id},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("weekend.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan { name: "First weekend".to_string(), extended: false })
//!     .await?;
//!
//! planner
//!     .add_activity(&AddActivity {
//!         plan_id: plan.id.clone(),
//!         activity_id: "hiking-trail".to_string(),
//!         day: DayLabel::Saturday,
//!         time: None,
//!     })
//!     .await?;
//!
//! let report = planner.validate_plan(&Id { id: plan.id }).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod repository;
pub mod scheduling;

// Re-export commonly used types
pub use catalog::Catalog;
pub use db::{Database, SqliteRepository};
pub use display::{
    Activities, CreateResult, DeleteResult, OperationStatus, PlanSummaries, Themes, UpdateResult,
    ValidationReport,
};
pub use error::{PlannerError, Result};
pub use models::{
    Activity, ActivityCategory, ActivityFilter, DayLabel, Mood, PlanSummary, ScheduledActivity,
    TimeOfDay, WeekendPlan, WeekendTheme,
};
pub use params::{
    AddActivity, ApplyTheme, CreatePlan, DeletePlan, ExportFormat, ExportPlan, Id, ListActivities,
    RemoveActivity, ReorderDay, Reschedule,
};
pub use planner::{Clock, Planner, PlannerBuilder};
pub use repository::{MemoryRepository, PlanRepository};
pub use scheduling::{assign_start_time, validate, PlanValidation, ValidationResult};
