//! Data models for activities, scheduled activities and weekend plans.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that the data structures stay free of
//! presentation logic.
//!
//! - [`Activity`] and [`WeekendTheme`] are immutable catalog entries.
//! - [`ScheduledActivity`] is a catalog activity placed on a day at a time.
//! - [`WeekendPlan`] owns the per-day lists and the mutations that keep
//!   their `order` fields contiguous.
//! - [`PlanSummary`] carries the weekend statistics shown in listings.
//!
//! # Examples
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use weekendly_core::{catalog::Catalog, models::{DayLabel, WeekendPlan}};
//!
//! let catalog = Catalog::builtin();
//! let mut plan = WeekendPlan::new("Lazy weekend", false, Timestamp::now());
//! let now = date(2025, 6, 4).at(12, 0, 0, 0);
//!
//! let brunch = catalog.activity("brunch-cafe").unwrap();
//! let placed = plan.add_activity(brunch, DayLabel::Saturday, None, now).unwrap();
//! assert_eq!(placed.order, 0);
//! assert!(plan.validate().is_valid());
//! ```

pub mod activity;
pub mod filters;
pub mod plan;
pub mod scheduled;
pub mod summary;
pub mod tags;


pub use activity::{Activity, WeekendTheme};
pub use filters::ActivityFilter;
pub use plan::WeekendPlan;
pub use scheduled::ScheduledActivity;
pub use summary::PlanSummary;
pub use tags::{ActivityCategory, DayLabel, Mood, TimeOfDay};
