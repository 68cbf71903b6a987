//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::{datetime::ScheduleTime, models::short_id};
use crate::{
    models::{ScheduledActivity, WeekendPlan},
    scheduling::PlanValidation,
};

/// Wrapper for displaying the result of a create operation.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<WeekendPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<ScheduledActivity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scheduled {} on {} at {} (ID: {})",
            self.resource.name,
            self.resource.day,
            ScheduleTime(&self.resource.scheduled_time),
            short_id(&self.resource.id)
        )
    }
}

/// Wrapper for displaying a changed resource with a description of the
/// change.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<WeekendPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<ScheduledActivity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} now starts {}",
            self.resource.name,
            ScheduleTime(&self.resource.scheduled_time)
        )?;
        for change in &self.changes {
            writeln!(f, "- {change}")?;
        }
        Ok(())
    }
}

/// Wrapper for displaying the result of a delete operation.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<WeekendPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<ScheduledActivity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed {} from {} (ID: {})",
            self.resource.name,
            self.resource.day,
            short_id(&self.resource.id)
        )
    }
}

/// A plan together with its validation, so suggestions can be shown by
/// activity name.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub plan: WeekendPlan,
    pub validation: PlanValidation,
}

impl ValidationReport {
    /// Validates `plan`.
    pub fn new(plan: WeekendPlan) -> Self {
        let validation = plan.validate();
        Self { plan, validation }
    }

    /// True when no day has a conflict.
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    fn name_of<'a>(&'a self, scheduled_id: &'a str) -> &'a str {
        self.plan
            .find_activity(scheduled_id)
            .map_or(scheduled_id, |a| a.name.as_str())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Validation: {}", self.plan.name)?;
        writeln!(f)?;

        let conflicts = self.validation.conflict_count();
        let suggestions = self.validation.suggestion_count();
        if self.is_valid() {
            writeln!(f, "No conflicts found.")?;
        } else {
            writeln!(f, "Found {conflicts} conflict(s).")?;
        }

        for day in &self.validation.0 {
            let result = &day.result;
            if result.conflicts.is_empty() && result.suggestions.is_empty() {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "## {}", day.day)?;
            writeln!(f)?;
            for conflict in &result.conflicts {
                writeln!(
                    f,
                    "- **Conflict**: {} and {}: {}",
                    conflict.activity1, conflict.activity2,
                    conflict.reason
                )?;
            }
            for suggestion in &result.suggestions {
                writeln!(
                    f,
                    "- Tip for {}: {}",
                    self.name_of(&suggestion.activity_id),
                    suggestion.suggestion
                )?;
            }
        }

        if suggestions == 0 && self.is_valid() {
            writeln!(f)?;
            writeln!(f, "Your weekend looks good.")?;
        }
        Ok(())
    }
}
