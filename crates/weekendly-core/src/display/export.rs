//! Plain-text and JSON export of a plan.

use std::fmt;

use jiff::Timestamp;
use serde::Serialize;

use super::datetime::{ClockTime, LocalDate};
use crate::{error::Result, models::WeekendPlan};

/// Version tag written into JSON exports.
pub const EXPORT_VERSION: &str = "1.0";

/// Envelope written by [`to_json`].
#[derive(Debug, Serialize)]
pub struct PlanExport<'a> {
    pub plan: &'a WeekendPlan,
    pub exported_at: Timestamp,
    pub version: &'static str,
}

/// A plan rendered as a plain day-by-day listing.
///
/// Each day lists `HH:MM - name (Nmin)` lines sorted by start time. The
/// listing ends with the footer line and no trailing newline.
pub struct PlanText<'a>(pub &'a WeekendPlan);

impl fmt::Display for PlanText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        writeln!(f, "Weekend Plan - {}", plan.name)?;
        writeln!(f, "Created: {}", LocalDate(&plan.created_at))?;

        for day in plan.days() {
            writeln!(f)?;
            writeln!(f, "{}", day.as_str().to_uppercase())?;

            let mut activities: Vec<_> = plan.day(day).iter().collect();
            if activities.is_empty() {
                writeln!(f, "No activities planned")?;
                continue;
            }
            activities.sort_by_key(|a| a.scheduled_time);
            for activity in activities {
                writeln!(
                    f,
                    "{} - {} ({}min)",
                    ClockTime(&activity.scheduled_time),
                    activity.name,
                    activity.duration
                )?;
            }
        }

        write!(f, "\nGenerated by Weekendly")
    }
}

/// Renders a plan with [`PlanText`].
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, Timestamp};
/// use weekendly_core::{catalog::Catalog, display::export, models::{DayLabel, WeekendPlan}};
///
/// let catalog = Catalog::builtin();
/// let mut plan = WeekendPlan::new("Chill", false, Timestamp::now());
/// let at = date(2025, 6, 7).at(9, 0, 0, 0);
/// plan.add_activity(catalog.activity("brunch-cafe").unwrap(), DayLabel::Saturday, Some(at), at)
///     .unwrap();
///
/// let text = export::to_text(&plan);
/// assert!(text.starts_with("Weekend Plan - Chill\n"));
/// assert!(text.contains("SATURDAY\n09:00 - Brunch at a Café (90min)\n"));
/// assert!(text.contains("SUNDAY\nNo activities planned\n"));
/// assert!(text.ends_with("Generated by Weekendly"));
/// ```
pub fn to_text(plan: &WeekendPlan) -> String {
    PlanText(plan).to_string()
}

/// Renders a plan as a pretty-printed JSON document with export metadata.
///
/// # Errors
///
/// `PlannerError::Serialization` if the plan cannot be serialized.
pub fn to_json(plan: &WeekendPlan, exported_at: Timestamp) -> Result<String> {
    let export = PlanExport {
        plan,
        exported_at,
        version: EXPORT_VERSION,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
