//! Plan lifecycle operations for the Planner.

use log::{debug, info};

use super::{resolve_plan, Planner};
use crate::{
    display::{export, PlanSummaries, ValidationReport},
    error::{PlannerError, Result},
    models::{DayLabel, PlanSummary, WeekendPlan},
    params::{ApplyTheme, CreatePlan, DeletePlan, ExportFormat, ExportPlan, Id},
};

/// Number of theme suggestions placed when a theme is applied.
const THEME_ACTIVITY_COUNT: usize = 4;

/// Suggestions before this index go to Saturday, the rest to Sunday.
const THEME_SATURDAY_COUNT: usize = 2;

impl Planner {
    /// Creates and stores an empty plan.
    ///
    /// # Errors
    ///
    /// `PlannerError::InvalidInput` for a blank name.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<WeekendPlan> {
        let name = params.validate()?;
        let plan = WeekendPlan::new(name, params.extended, self.clock.timestamp());

        let saved = plan.clone();
        self.blocking(move |repository| repository.save(&saved)).await?;

        info!("Created plan {} ({})", plan.id, plan.name);
        Ok(plan)
    }

    /// Retrieves a plan by its exact ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<WeekendPlan>> {
        let id = params.id.clone();
        self.blocking(move |repository| repository.load(&id)).await
    }

    /// Retrieves a plan by ID or by a prefix matching exactly one plan ID.
    ///
    /// # Errors
    ///
    /// `PlannerError::PlanNotFound` if nothing matches,
    /// `PlannerError::InvalidInput` if the prefix is ambiguous.
    pub async fn find_plan(&self, params: &Id) -> Result<WeekendPlan> {
        let plan_ref = params.id.clone();
        self.blocking(move |repository| resolve_plan(repository, &plan_ref))
            .await
    }

    /// Lists all plans as summaries, most recently updated first.
    pub async fn list_plans(&self) -> Result<PlanSummaries> {
        let plans = self.blocking(|repository| repository.list()).await?;
        debug!("Listing {} plans", plans.len());
        Ok(PlanSummaries(plans.iter().map(PlanSummary::from).collect()))
    }

    /// Permanently deletes a plan and everything scheduled in it.
    ///
    /// Returns the deleted plan.
    ///
    /// # Errors
    ///
    /// `PlannerError::InvalidInput` unless `params.confirmed` is set.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<WeekendPlan> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input("confirmed")
                .with_reason("Deleting a plan cannot be undone and must be confirmed"));
        }

        let plan_ref = params.id.clone();
        let plan = self
            .blocking(move |repository| {
                let plan = resolve_plan(repository, &plan_ref)?;
                if !repository.delete(&plan.id)? {
                    return Err(PlannerError::PlanNotFound { id: plan.id });
                }
                Ok(plan)
            })
            .await?;

        info!("Deleted plan {} ({})", plan.id, plan.name);
        Ok(plan)
    }

    /// Checks every day of a plan for overlaps and buffer suggestions.
    pub async fn validate_plan(&self, params: &Id) -> Result<ValidationReport> {
        let plan = self.find_plan(params).await?;
        let report = ValidationReport::new(plan);
        debug!(
            "Validated plan {}: {} conflicts, {} suggestions",
            report.plan.id,
            report.validation.conflict_count(),
            report.validation.suggestion_count()
        );
        Ok(report)
    }

    /// Tags a plan with a theme and schedules its first suggestions.
    ///
    /// The first two suggested catalog activities go to Saturday and the
    /// next two to Sunday, each at a free slot. Existing activities stay.
    ///
    /// # Errors
    ///
    /// `PlannerError::ThemeNotFound` for an unknown theme.
    pub async fn apply_theme(&self, params: &ApplyTheme) -> Result<WeekendPlan> {
        let theme_id = params.theme_id.clone();
        if self.catalog.theme(&theme_id).is_none() {
            return Err(PlannerError::ThemeNotFound { id: theme_id });
        }

        let (plan, added) = self
            .update_plan(&params.plan_id, move |plan, catalog, now| {
                let theme = catalog
                    .theme(&theme_id)
                    .ok_or_else(|| PlannerError::ThemeNotFound { id: theme_id.clone() })?;
                plan.theme_id = Some(theme.id.clone());

                let picks: Vec<_> = catalog
                    .suggested_for(theme)
                    .into_iter()
                    .take(THEME_ACTIVITY_COUNT)
                    .collect();
                for (index, activity) in picks.iter().enumerate() {
                    let day = if index < THEME_SATURDAY_COUNT {
                        DayLabel::Saturday
                    } else {
                        DayLabel::Sunday
                    };
                    plan.add_activity(activity, day, None, now)?;
                }
                Ok(picks.len())
            })
            .await?;

        info!("Applied theme {} to plan {} ({added} activities)", params.theme_id, plan.id);
        Ok(plan)
    }

    /// Renders a plan as text or JSON.
    pub async fn export_plan(&self, params: &ExportPlan) -> Result<String> {
        let plan = self.find_plan(&Id { id: params.id.clone() }).await?;
        match params.format {
            ExportFormat::Text => Ok(export::to_text(&plan)),
            ExportFormat::Json => export::to_json(&plan, self.clock.timestamp()),
        }
    }
}
