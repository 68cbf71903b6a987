//! Filter types for querying the activity catalog.

use super::{Activity, ActivityCategory, Mood, TimeOfDay};

/// Filter options for browsing catalog activities.
///
/// Every criterion is optional: an empty list or `None` matches everything.
/// Criteria combine with AND; values within one list combine with OR.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Keep activities in any of these categories
    pub categories: Vec<ActivityCategory>,

    /// Keep activities with any of these moods
    pub moods: Vec<Mood>,

    /// Keep activities preferring any of these windows
    pub time_of_day: Vec<TimeOfDay>,

    /// Case-insensitive substring of name, description or a tag
    pub search_term: Option<String>,
}

impl ActivityFilter {
    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.moods.is_empty()
            && self.time_of_day.is_empty()
            && self.search_term.as_deref().map_or(true, str::is_empty)
    }

    /// Whether `activity` passes every criterion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weekendly_core::{catalog::Catalog, models::{ActivityCategory, ActivityFilter}};
    ///
    /// let catalog = Catalog::builtin();
    /// let brunch = catalog.activity("brunch-cafe").unwrap();
    ///
    /// let food = ActivityFilter {
    ///     categories: vec![ActivityCategory::Food],
    ///     ..Default::default()
    /// };
    /// assert!(food.matches(brunch));
    ///
    /// let search = ActivityFilter {
    ///     search_term: Some("BRUNCH".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(search.matches(brunch));
    /// ```
    pub fn matches(&self, activity: &Activity) -> bool {
        if let Some(term) = self.search_term.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = activity.name.to_lowercase().contains(&term)
                || activity.description.to_lowercase().contains(&term)
                || activity
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&activity.category) {
            return false;
        }

        if !self.moods.is_empty() && !self.moods.contains(&activity.mood) {
            return false;
        }

        if !self.time_of_day.is_empty()
            && !self
                .time_of_day
                .iter()
                .any(|window| activity.time_of_day.contains(window))
        {
            return false;
        }

        true
    }
}
