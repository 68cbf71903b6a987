//! Operations that place and move activities within a plan.

use log::debug;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::{ScheduledActivity, WeekendPlan},
    params::{AddActivity, RemoveActivity, ReorderDay, Reschedule},
};

/// Resolves a scheduled activity ID or unique prefix within `plan`.
fn resolve_scheduled(plan: &WeekendPlan, scheduled_ref: &str) -> Result<String> {
    if plan.find_activity(scheduled_ref).is_some() {
        return Ok(scheduled_ref.to_string());
    }

    let matches: Vec<&ScheduledActivity> = plan
        .activities()
        .filter(|a| !scheduled_ref.is_empty() && a.id.starts_with(scheduled_ref))
        .collect();

    match matches.as_slice() {
        [] => Err(PlannerError::ScheduledActivityNotFound {
            id: scheduled_ref.to_string(),
        }),
        [only] => Ok(only.id.clone()),
        _ => Err(PlannerError::invalid_input("scheduled_id").with_reason(format!(
            "'{scheduled_ref}' matches {} activities; use more characters",
            matches.len()
        ))),
    }
}

impl Planner {
    /// Schedules a catalog activity on a day of a plan.
    ///
    /// Without an explicit time, the first free slot in the activity's
    /// preferred windows is used.
    ///
    /// # Errors
    ///
    /// `PlannerError::ActivityNotFound` for an unknown catalog ID,
    /// `PlannerError::InvalidInput` for Friday or Monday on a regular plan.
    pub async fn add_activity(&self, params: &AddActivity) -> Result<ScheduledActivity> {
        let activity_id = params.activity_id.clone();
        let day = params.day;
        let time = params.time;

        let (plan, placed) = self
            .update_plan(&params.plan_id, move |plan, catalog, now| {
                let activity = catalog
                    .activity(&activity_id)
                    .ok_or(PlannerError::ActivityNotFound { id: activity_id })?;
                plan.add_activity(activity, day, time, now)
            })
            .await?;

        debug!(
            "Scheduled {} on {} at {} in plan {}",
            placed.activity_id,
            placed.day.as_str(),
            placed.scheduled_time,
            plan.id
        );
        Ok(placed)
    }

    /// Removes a scheduled activity and closes the gap in its day's order.
    pub async fn remove_activity(&self, params: &RemoveActivity) -> Result<ScheduledActivity> {
        let scheduled_ref = params.scheduled_id.clone();

        let (plan, removed) = self
            .update_plan(&params.plan_id, move |plan, _, _| {
                let id = resolve_scheduled(plan, &scheduled_ref)?;
                plan.remove_activity(&id)
            })
            .await?;

        debug!("Removed {} from plan {}", removed.id, plan.id);
        Ok(removed)
    }

    /// Puts one day's activities into a new order. Start times are kept.
    ///
    /// # Errors
    ///
    /// `PlannerError::InvalidInput` unless the IDs cover the day exactly.
    pub async fn reorder_day(&self, params: &ReorderDay) -> Result<WeekendPlan> {
        let day = params.day;
        let refs = params.ids.clone();

        let (plan, ()) = self
            .update_plan(&params.plan_id, move |plan, _, _| {
                let ids = refs
                    .iter()
                    .map(|r| resolve_scheduled(plan, r))
                    .collect::<Result<Vec<_>>>()?;
                plan.reorder_day(day, &ids)
            })
            .await?;

        debug!("Reordered {} in plan {}", day.as_str(), plan.id);
        Ok(plan)
    }

    /// Moves a scheduled activity to a new start time.
    ///
    /// The new time is not checked for overlaps; run
    /// [`Planner::validate_plan`] to see conflicts.
    pub async fn reschedule_activity(&self, params: &Reschedule) -> Result<ScheduledActivity> {
        let scheduled_ref = params.scheduled_id.clone();
        let time = params.time;

        let (plan, moved) = self
            .update_plan(&params.plan_id, move |plan, _, _| {
                let id = resolve_scheduled(plan, &scheduled_ref)?;
                plan.reschedule(&id, time)
            })
            .await?;

        debug!("Moved {} to {} in plan {}", moved.id, moved.scheduled_time, plan.id);
        Ok(moved)
    }
}
