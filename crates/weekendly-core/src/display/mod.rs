//! Display formatting for planner output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrappers for collections and operation results, plus the
//! text and JSON export formats.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (WeekendPlan,   │───▶│ export formats  │───▶│    Output       │
//! │  Activity, ...) │    │                 │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanSummaries, Activities, Themes)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult, ValidationReport)
//! - [`status`]: One-line status messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`export`]: Plain-text and JSON plan export
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use weekendly_core::{display::{CreateResult, OperationStatus}, models::WeekendPlan};
//!
//! let plan = WeekendPlan::new("New weekend", false, Timestamp::now());
//! let output = format!("{}", CreateResult::new(plan.clone()));
//! assert!(output.contains(&format!("Created plan with ID: {}", plan.id)));
//! assert!(output.contains("No activities planned"));
//!
//! let status = OperationStatus::success("Reordered saturday");
//! assert_eq!(status.to_string(), "Success: Reordered saturday\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod export;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Activities, PlanSummaries, Themes};
pub use datetime::{ClockTime, LocalDate, LocalDateTime, ScheduleTime};
pub use results::{CreateResult, DeleteResult, UpdateResult, ValidationReport};
pub use status::OperationStatus;
