//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Activity, PlanSummary, WeekendTheme};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use weekendly_core::{display::PlanSummaries, models::{PlanSummary, WeekendPlan}};
///
/// let plan = WeekendPlan::new("Beach trip", false, Timestamp::now());
/// let summaries = PlanSummaries(vec![PlanSummary::from(&plan)]);
///
/// let output = format!("{}", summaries);
/// assert!(output.contains("Beach trip"));
/// assert!(format!("{}", PlanSummaries(vec![])).contains("No plans found."));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the plan summary at the given index.
    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying catalog activities.
#[derive(Debug, Clone, Default)]
pub struct Activities(pub Vec<Activity>);

impl Activities {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Activities {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Activities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No activities match.");
        }
        for activity in &self.0 {
            write!(f, "{activity}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying weekend themes.
#[derive(Debug, Clone, Default)]
pub struct Themes(pub Vec<WeekendTheme>);

impl Themes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeekendTheme> {
        self.0.iter()
    }
}

impl fmt::Display for Themes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No themes available.");
        }
        for theme in &self.0 {
            write!(f, "{theme}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_activities_display() {
        let catalog = Catalog::builtin();
        let spa = catalog.activity("spa-day").unwrap().clone();
        let output = Activities(vec![spa]).to_string();
        assert!(output.contains("## Spa Day (spa-day)"));
        assert!(output.contains("- Duration: 180 min"));
        assert!(output.contains("- Best time: afternoon"));

        assert_eq!(Activities::default().to_string(), "No activities match.\n");
    }

    #[test]
    fn test_themes_display() {
        let themes = Themes(Catalog::builtin().themes().to_vec());
        let output = themes.to_string();
        assert!(output.contains("## Lazy Weekend (lazy-weekend)"));
        assert!(output.contains("- Suggests: brunch-cafe, reading-nook"));
    }
}
