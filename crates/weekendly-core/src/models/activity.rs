//! Catalog activity and weekend theme definitions.

use serde::{Deserialize, Serialize};

use super::{ActivityCategory, Mood, TimeOfDay};

/// Immutable catalog template describing a potential weekend pastime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Catalog identifier (kebab-case slug)
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description shown in listings
    pub description: String,

    /// Category of the activity
    pub category: ActivityCategory,

    /// Duration in minutes
    pub duration: u32,

    /// Preferred time-of-day windows, most preferred first
    pub time_of_day: Vec<TimeOfDay>,

    /// Mood tag
    pub mood: Mood,

    /// Icon reference (display only)
    pub icon: String,

    /// Color token (display only)
    pub color: String,

    /// Free-form tags used by search
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Named collection of suggested catalog activities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekendTheme {
    /// Theme identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description of the theme
    pub description: String,

    /// Icon reference (display only)
    pub icon: String,

    /// Color token (display only)
    pub color: String,

    /// Catalog activity IDs suggested by this theme, in priority order
    pub suggested_activities: Vec<String>,
}
