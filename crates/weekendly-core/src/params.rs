//! Parameter structures for planner operations.
//!
//! These structures carry no framework derives beyond serde, so interface
//! layers (the CLI today) define their own argument types and convert into
//! them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Planner      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Fields that arrive as free text (category names, export formats) are
//! parsed here so every interface reports the same `InvalidInput` errors.

use std::str::FromStr;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{ActivityCategory, ActivityFilter, DayLabel, Mood, TimeOfDay},
};

/// Generic parameters for operations requiring just an ID.
///
/// Plan IDs may be given as a unique prefix of the full UUID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Name of the plan (required, non-blank)
    pub name: String,
    /// Whether the plan also covers Friday and Monday
    #[serde(default)]
    pub extended: bool,
}

impl CreatePlan {
    /// Returns the trimmed name.
    ///
    /// # Errors
    ///
    /// `PlannerError::InvalidInput` when the name is blank.
    pub fn validate(&self) -> Result<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PlannerError::invalid_input("name").with_reason("Plan name cannot be empty"));
        }
        Ok(name.to_string())
    }
}

/// Parameters for deleting a plan.
///
/// Deletion is permanent, so it must be explicitly confirmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    pub id: String,
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for placing a catalog activity into a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddActivity {
    /// Plan to add to
    pub plan_id: String,
    /// Catalog activity ID, e.g. `brunch-cafe`
    pub activity_id: String,
    /// Day to place it on
    pub day: DayLabel,
    /// Explicit start time; when absent a free slot is chosen
    #[serde(default)]
    pub time: Option<DateTime>,
}

/// Parameters for removing a scheduled activity from a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveActivity {
    pub plan_id: String,
    /// ID of the scheduled activity (or a unique prefix of it)
    pub scheduled_id: String,
}

/// Parameters for reordering one day of a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderDay {
    pub plan_id: String,
    pub day: DayLabel,
    /// Every scheduled activity ID of the day, in the new order. Unique
    /// prefixes are accepted.
    pub ids: Vec<String>,
}

/// Parameters for moving a scheduled activity to a new start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reschedule {
    pub plan_id: String,
    pub scheduled_id: String,
    pub time: DateTime,
}

/// Parameters for applying a theme to a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyTheme {
    pub plan_id: String,
    pub theme_id: String,
}

/// Output format for plan export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Human-readable day-by-day listing
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl FromStr for ExportFormat {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(PlannerError::invalid_input("format")
                .with_reason(format!("Invalid export format: {s}. Must be 'text' or 'json'"))),
        }
    }
}

/// Parameters for exporting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportPlan {
    pub id: String,
    #[serde(default)]
    pub format: ExportFormat,
}

/// Parameters for browsing the catalog.
///
/// Values are names as typed by a user (`food`, `early-morning`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListActivities {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub moods: Vec<String>,
    #[serde(default)]
    pub times: Vec<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl ListActivities {
    /// Parses the textual criteria into an [`ActivityFilter`].
    ///
    /// # Errors
    ///
    /// `PlannerError::InvalidInput` naming the first value that is not a
    /// known category, mood or time of day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weekendly_core::params::ListActivities;
    ///
    /// let params = ListActivities {
    ///     categories: vec!["food".to_string()],
    ///     times: vec!["early-morning".to_string()],
    ///     ..Default::default()
    /// };
    /// let filter = params.to_filter()?;
    /// assert_eq!(filter.categories.len(), 1);
    ///
    /// let bad = ListActivities {
    ///     moods: vec!["grumpy".to_string()],
    ///     ..Default::default()
    /// };
    /// assert!(bad.to_filter().is_err());
    /// # Ok::<(), weekendly_core::PlannerError>(())
    /// ```
    pub fn to_filter(&self) -> Result<ActivityFilter> {
        Ok(ActivityFilter {
            categories: parse_all::<ActivityCategory>("category", &self.categories)?,
            moods: parse_all::<Mood>("mood", &self.moods)?,
            time_of_day: parse_all::<TimeOfDay>("time", &self.times)?,
            search_term: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        })
    }
}

fn parse_all<T>(field: &str, values: &[String]) -> Result<Vec<T>>
where
    T: FromStr<Err = String>,
{
    values
        .iter()
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|reason| PlannerError::invalid_input(field).with_reason(reason))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_plan_validate_trims_name() {
        let params = CreatePlan {
            name: "  Beach weekend ".to_string(),
            extended: false,
        };
        assert_eq!(params.validate().unwrap(), "Beach weekend");

        let blank = CreatePlan {
            name: "   ".to_string(),
            extended: true,
        };
        match blank.validate().unwrap_err() {
            PlannerError::InvalidInput { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_export_format_parsing() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!("pdf".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::default(), ExportFormat::Text);
    }

    #[test]
    fn test_list_activities_to_filter() {
        let params = ListActivities {
            categories: vec!["Outdoor".to_string(), "food".to_string()],
            moods: vec!["relaxed".to_string()],
            times: vec!["evening".to_string()],
            search: Some("  ".to_string()),
        };
        let filter = params.to_filter().unwrap();
        assert_eq!(
            filter.categories,
            vec![ActivityCategory::Outdoor, ActivityCategory::Food]
        );
        assert_eq!(filter.moods, vec![Mood::Relaxed]);
        assert_eq!(filter.time_of_day, vec![TimeOfDay::Evening]);
        assert_eq!(filter.search_term, None);
    }

    #[test]
    fn test_list_activities_reports_bad_field() {
        let params = ListActivities {
            times: vec!["midnight".to_string()],
            ..Default::default()
        };
        match params.to_filter().unwrap_err() {
            PlannerError::InvalidInput { field, reason } => {
                assert_eq!(field, "time");
                assert!(reason.contains("midnight"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }
}
