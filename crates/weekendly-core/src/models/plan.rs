//! Weekend plan model and the mutations that keep its day lists ordered.

use jiff::{civil::DateTime, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Activity, DayLabel, PlanSummary, ScheduledActivity};
use crate::{
    error::{PlannerError, Result},
    scheduling::{self, DayValidation, PlanValidation, ValidationResult},
};

/// Aggregate of all scheduled activities across the days being planned.
///
/// Within each day list, `order` equals the list position; every mutation
/// below re-establishes that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekendPlan {
    /// Unique identifier for the plan (UUID v4)
    pub id: String,

    /// Name of the plan
    pub name: String,

    /// Theme applied to the plan, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,

    /// Whether Friday and Monday are part of the plan
    #[serde(default)]
    pub extended: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub friday: Vec<ScheduledActivity>,

    #[serde(default)]
    pub saturday: Vec<ScheduledActivity>,

    #[serde(default)]
    pub sunday: Vec<ScheduledActivity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monday: Vec<ScheduledActivity>,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}

impl WeekendPlan {
    /// Creates an empty plan with a fresh ID.
    pub fn new(name: impl Into<String>, extended: bool, now: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            theme_id: None,
            extended,
            friday: Vec::new(),
            saturday: Vec::new(),
            sunday: Vec::new(),
            monday: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Days this plan covers, in calendar order.
    pub fn days(&self) -> Vec<DayLabel> {
        DayLabel::ALL
            .into_iter()
            .filter(|day| self.extended || !day.is_extended())
            .collect()
    }

    /// Activities scheduled on `day`, in display order.
    pub fn day(&self, day: DayLabel) -> &[ScheduledActivity] {
        match day {
            DayLabel::Friday => &self.friday,
            DayLabel::Saturday => &self.saturday,
            DayLabel::Sunday => &self.sunday,
            DayLabel::Monday => &self.monday,
        }
    }

    pub(crate) fn day_mut(&mut self, day: DayLabel) -> &mut Vec<ScheduledActivity> {
        match day {
            DayLabel::Friday => &mut self.friday,
            DayLabel::Saturday => &mut self.saturday,
            DayLabel::Sunday => &mut self.sunday,
            DayLabel::Monday => &mut self.monday,
        }
    }

    /// Every scheduled activity across all days, day by day.
    pub fn activities(&self) -> impl Iterator<Item = &ScheduledActivity> {
        DayLabel::ALL.into_iter().flat_map(move |day| self.day(day).iter())
    }

    /// Looks up a scheduled activity by its ID on any day.
    pub fn find_activity(&self, scheduled_id: &str) -> Option<&ScheduledActivity> {
        self.activities().find(|a| a.id == scheduled_id)
    }

    /// Total number of scheduled activities.
    pub fn len(&self) -> usize {
        DayLabel::ALL.iter().map(|&day| self.day(day).len()).sum()
    }

    /// True when nothing is scheduled on any day.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records a modification time.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    fn ensure_day(&self, day: DayLabel) -> Result<()> {
        if day.is_extended() && !self.extended {
            return Err(PlannerError::invalid_input("day").with_reason(format!(
                "{} is only available in extended plans",
                day.as_str()
            )));
        }
        Ok(())
    }

    /// Appends a catalog activity to the end of `day`.
    ///
    /// With no explicit `time`, the start is chosen by
    /// [`scheduling::assign_start_time`] against the activities already on
    /// that day.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when `day` is Friday or Monday
    /// and the plan is not extended.
    pub fn add_activity(
        &mut self,
        activity: &Activity,
        day: DayLabel,
        time: Option<DateTime>,
        now: DateTime,
    ) -> Result<ScheduledActivity> {
        self.ensure_day(day)?;

        let scheduled_time = match time {
            Some(time) => time,
            None => scheduling::assign_start_time(activity, day, self.day(day), now),
        };

        let list = self.day_mut(day);
        let scheduled = ScheduledActivity::from_activity(activity, day, scheduled_time, list.len() as u32);
        list.push(scheduled.clone());
        Ok(scheduled)
    }

    /// Removes a scheduled activity from whichever day holds it.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ScheduledActivityNotFound` if no day holds it.
    pub fn remove_activity(&mut self, scheduled_id: &str) -> Result<ScheduledActivity> {
        for day in DayLabel::ALL {
            let list = self.day_mut(day);
            if let Some(index) = list.iter().position(|a| a.id == scheduled_id) {
                let removed = list.remove(index);
                renumber(list);
                return Ok(removed);
            }
        }
        Err(PlannerError::ScheduledActivityNotFound {
            id: scheduled_id.to_string(),
        })
    }

    /// Puts `day`'s activities in the order given by `ids`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` unless `ids` names every
    /// activity of the day exactly once.
    pub fn reorder_day(&mut self, day: DayLabel, ids: &[String]) -> Result<()> {
        self.ensure_day(day)?;

        let list = self.day_mut(day);
        if ids.len() != list.len() {
            return Err(PlannerError::invalid_input("ids").with_reason(format!(
                "expected {} activity IDs for {}, got {}",
                list.len(),
                day.as_str(),
                ids.len()
            )));
        }

        let mut remaining = std::mem::take(list);
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in ids {
            match remaining.iter().position(|a| &a.id == id) {
                Some(index) => reordered.push(remaining.remove(index)),
                None => {
                    // Restore before bailing out so the plan is unchanged.
                    reordered.append(&mut remaining);
                    reordered.sort_by_key(|a| a.order);
                    *list = reordered;
                    return Err(PlannerError::invalid_input("ids").with_reason(format!(
                        "{id} is not scheduled on {} or is listed twice",
                        day.as_str()
                    )));
                }
            }
        }

        renumber(&mut reordered);
        *list = reordered;
        Ok(())
    }

    /// Moves a scheduled activity to a new start time on the same day.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ScheduledActivityNotFound` if no day holds it.
    pub fn reschedule(&mut self, scheduled_id: &str, time: DateTime) -> Result<ScheduledActivity> {
        for day in DayLabel::ALL {
            if let Some(activity) = self.day_mut(day).iter_mut().find(|a| a.id == scheduled_id) {
                activity.scheduled_time = time;
                return Ok(activity.clone());
            }
        }
        Err(PlannerError::ScheduledActivityNotFound {
            id: scheduled_id.to_string(),
        })
    }

    /// Weekend statistics for listings.
    pub fn stats(&self) -> PlanSummary {
        PlanSummary::from(self)
    }

    /// Validates a single day.
    pub fn validate_day(&self, day: DayLabel) -> ValidationResult {
        scheduling::validate(self.day(day))
    }

    /// Validates every day the plan covers.
    pub fn validate(&self) -> PlanValidation {
        PlanValidation(
            self.days()
                .into_iter()
                .map(|day| DayValidation {
                    day,
                    result: self.validate_day(day),
                })
                .collect(),
        )
    }
}

fn renumber(list: &mut [ScheduledActivity]) {
    for (index, activity) in list.iter_mut().enumerate() {
        activity.order = index as u32;
    }
}
