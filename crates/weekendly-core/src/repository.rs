//! Plan storage abstraction.
//!
//! The planner only talks to a [`PlanRepository`]. Two implementations ship
//! with the crate: [`MemoryRepository`] for tests and throwaway sessions, and
//! [`SqliteRepository`](crate::db::SqliteRepository) for the on-disk store.

use std::{collections::BTreeMap, sync::Mutex};

use crate::{
    error::{PlannerError, Result},
    models::WeekendPlan,
};

/// Keyed storage for whole weekend plans.
///
/// Implementations are called from blocking worker threads, so every
/// method takes `&self` and the trait requires `Send + Sync`.
pub trait PlanRepository: Send + Sync {
    /// Loads the plan with `id`, or `None` if it does not exist.
    fn load(&self, id: &str) -> Result<Option<WeekendPlan>>;

    /// Inserts or replaces a plan.
    fn save(&self, plan: &WeekendPlan) -> Result<()>;

    /// Deletes a plan. Returns `false` if nothing was stored under `id`.
    fn delete(&self, id: &str) -> Result<bool>;

    /// All stored plans, most recently updated first.
    fn list(&self) -> Result<Vec<WeekendPlan>>;
}

/// Process-local repository backed by a map.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    plans: Mutex<BTreeMap<String, WeekendPlan>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, WeekendPlan>>> {
        self.plans.lock().map_err(|_| PlannerError::Configuration {
            message: "Plan store lock poisoned".to_string(),
        })
    }
}

impl PlanRepository for MemoryRepository {
    fn load(&self, id: &str) -> Result<Option<WeekendPlan>> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn save(&self, plan: &WeekendPlan) -> Result<()> {
        self.lock()?.insert(plan.id.clone(), plan.clone());
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.lock()?.remove(id).is_some())
    }

    fn list(&self) -> Result<Vec<WeekendPlan>> {
        let mut plans: Vec<WeekendPlan> = self.lock()?.values().cloned().collect();
        plans.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.name.cmp(&b.name)));
        Ok(plans)
    }
}
