//! Plan summary types with weekend statistics.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ActivityCategory, WeekendPlan};

/// Summary information about a plan with activity statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Name of the plan
    pub name: String,
    /// Whether the plan covers Friday and Monday
    pub extended: bool,
    /// Theme applied to the plan
    pub theme_id: Option<String>,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Number of scheduled activities across all days
    pub total_activities: u32,
    /// Sum of all activity durations in minutes
    pub total_minutes: u32,
    /// Number of distinct categories scheduled
    pub unique_categories: u32,
    /// Most frequent category and its count; ties go to the category
    /// declared first
    pub top_category: Option<(ActivityCategory, u32)>,
}

impl From<&WeekendPlan> for PlanSummary {
    fn from(plan: &WeekendPlan) -> Self {
        let mut breakdown: BTreeMap<ActivityCategory, u32> = BTreeMap::new();
        let mut total_minutes = 0u32;
        for activity in plan.activities() {
            *breakdown.entry(activity.category).or_default() += 1;
            total_minutes = total_minutes.saturating_add(activity.duration);
        }

        let top_category = breakdown
            .iter()
            .fold(None, |best: Option<(ActivityCategory, u32)>, (&category, &count)| {
                match best {
                    Some((_, best_count)) if best_count >= count => best,
                    _ => Some((category, count)),
                }
            });

        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            extended: plan.extended,
            theme_id: plan.theme_id.clone(),
            created_at: plan.created_at,
            updated_at: plan.updated_at,
            total_activities: plan.len() as u32,
            total_minutes,
            unique_categories: breakdown.len() as u32,
            top_category,
        }
    }
}
