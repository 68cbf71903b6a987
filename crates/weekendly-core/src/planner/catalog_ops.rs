//! Read-only catalog queries for the Planner.

use crate::{
    display::{Activities, Themes},
    error::{PlannerError, Result},
    models::Activity,
    params::{Id, ListActivities},
};

use super::Planner;

impl Planner {
    /// Catalog activities matching the given criteria, in catalog order.
    ///
    /// # Errors
    ///
    /// `PlannerError::InvalidInput` for an unknown category, mood or time
    /// of day.
    pub fn list_activities(&self, params: &ListActivities) -> Result<Activities> {
        let filter = params.to_filter()?;
        Ok(Activities(self.catalog.filter(&filter)))
    }

    /// Looks up one catalog activity.
    pub fn get_activity(&self, params: &Id) -> Result<Activity> {
        self.catalog
            .activity(&params.id)
            .cloned()
            .ok_or_else(|| PlannerError::ActivityNotFound {
                id: params.id.clone(),
            })
    }

    /// All weekend themes.
    pub fn themes(&self) -> Themes {
        Themes(self.catalog.themes().to_vec())
    }
}
