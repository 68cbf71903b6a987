//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it; with colors
//! disabled it is printed as-is.

use std::fmt;

use super::datetime::{ClockTime, LocalDateTime};
use crate::models::{
    Activity, ActivityCategory, DayLabel, Mood, PlanSummary, ScheduledActivity, TimeOfDay,
    WeekendPlan, WeekendTheme,
};

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn title_case(day: DayLabel) -> String {
    let name = day.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Duration: {} min", self.duration)?;
        writeln!(f, "- Best time: {}", join(&self.time_of_day))?;
        writeln!(f, "- Mood: {}", self.mood)?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for WeekendTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "- Suggests: {}", self.suggested_activities.join(", "))?;
        writeln!(f)
    }
}

impl fmt::Display for ScheduledActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}-{}** {} ({} min, {}) `{}`",
            ClockTime(&self.scheduled_time),
            ClockTime(&self.end_time()),
            self.name,
            self.duration,
            self.category,
            short_id(&self.id)
        )
    }
}

/// First eight characters of a UUID, enough to address it from the CLI.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

impl fmt::Display for WeekendPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        if let Some(theme) = &self.theme_id {
            writeln!(f, "- Theme: {theme}")?;
        }
        if self.extended {
            writeln!(f, "- Long weekend: yes")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        for day in self.days() {
            let activities = self.day(day);
            writeln!(f)?;
            match activities.first() {
                Some(first) => writeln!(
                    f,
                    "## {} ({})",
                    title_case(day),
                    first.scheduled_time.date()
                )?,
                None => writeln!(f, "## {}", title_case(day))?,
            }
            writeln!(f)?;
            if activities.is_empty() {
                writeln!(f, "No activities planned")?;
            }
            for activity in activities {
                write!(f, "{activity}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, short_id(&self.id))?;
        writeln!(f)?;

        let hours = self.total_minutes / 60;
        let minutes = self.total_minutes % 60;
        writeln!(
            f,
            "- **Activities**: {} ({hours}h {minutes:02}m)",
            self.total_activities
        )?;
        if let Some((category, count)) = self.top_category {
            writeln!(
                f,
                "- **Mostly**: {category} ({count} of {}, {} categories)",
                self.total_activities, self.unique_categories
            )?;
        }
        if let Some(theme) = &self.theme_id {
            writeln!(f, "- **Theme**: {theme}")?;
        }
        if self.extended {
            writeln!(f, "- **Long weekend**")?;
        }
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}
