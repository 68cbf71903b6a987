//! Scheduled activity model definition.

use jiff::{civil::DateTime, SignedDuration};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Activity, ActivityCategory, DayLabel, Mood, TimeOfDay};

/// Concrete placement of a catalog activity onto a day of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledActivity {
    /// Unique identifier of this placement (distinct from the catalog ID)
    pub id: String,

    /// ID of the originating catalog activity
    pub activity_id: String,

    /// Display name copied from the catalog
    pub name: String,

    /// Description copied from the catalog
    pub description: String,

    /// Category copied from the catalog
    pub category: ActivityCategory,

    /// Duration in minutes
    pub duration: u32,

    /// Preferred time-of-day windows copied from the catalog
    pub time_of_day: Vec<TimeOfDay>,

    /// Mood copied from the catalog
    pub mood: Mood,

    /// Icon reference (display only)
    pub icon: String,

    /// Color token (display only)
    pub color: String,

    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Local start date and time
    pub scheduled_time: DateTime,

    /// Day bucket this activity belongs to
    pub day: DayLabel,

    /// Position within its day (0-indexed)
    pub order: u32,
}

impl ScheduledActivity {
    /// Places a catalog activity at the given time with a freshly generated
    /// ID.
    pub fn from_activity(activity: &Activity, day: DayLabel, scheduled_time: DateTime, order: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            activity_id: activity.id.clone(),
            name: activity.name.clone(),
            description: activity.description.clone(),
            category: activity.category,
            duration: activity.duration,
            time_of_day: activity.time_of_day.clone(),
            mood: activity.mood,
            icon: activity.icon.clone(),
            color: activity.color.clone(),
            tags: activity.tags.clone(),
            scheduled_time,
            day,
            order,
        }
    }

    /// Wall-clock length of the activity.
    pub fn length(&self) -> SignedDuration {
        SignedDuration::from_mins(i64::from(self.duration))
    }

    /// Local end date and time (start plus duration).
    ///
    /// Saturates at [`DateTime::MAX`].
    pub fn end_time(&self) -> DateTime {
        self.scheduled_time
            .checked_add(self.length())
            .unwrap_or(DateTime::MAX)
    }
}
