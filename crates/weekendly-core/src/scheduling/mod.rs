//! The scheduling engine.
//!
//! Two pure, synchronous components sit here, neither of which touches the
//! plan repository or holds state between calls:
//!
//! - [`assign_start_time`]: picks a start time for an activity being added
//!   to a day, honouring its preferred time-of-day windows and avoiding the
//!   hours already taken on that day.
//! - [`validate`]: walks a day's activities in time order, reporting hard
//!   overlaps as conflicts and pacing problems (meal buffers, energetic to
//!   relaxed transitions) as suggestions.
//!
//! Both always return a usable value. Slot assignment degrades to
//! "one hour from now" rather than failing, and validation problems are
//! warnings for the caller to surface, not errors.
//!
//! The current time is a parameter so results are deterministic; the
//! [`crate::planner::Planner`] supplies it from its configured clock.
//!
//! ```text
//! ┌──────────────────┐   add activity   ┌──────────────────┐
//! │  WeekendPlan     │ ───────────────▶ │ assign_start_time│
//! │  (day lists)     │                  └──────────────────┘
//! │                  │   show / check   ┌──────────────────┐
//! │                  │ ───────────────▶ │ validate         │
//! └──────────────────┘                  └──────────────────┘
//! ```

pub mod assigner;
pub mod time_table;
pub mod validator;

pub use assigner::{assign_start_time, days_until};
pub use validator::{
    validate, Conflict, DayValidation, PlanValidation, Suggestion, ValidationResult,
};
