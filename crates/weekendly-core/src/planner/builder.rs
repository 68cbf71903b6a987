//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::{Clock, Planner};
use crate::{
    catalog::Catalog,
    db::SqliteRepository,
    error::{PlannerError, Result},
    repository::{MemoryRepository, PlanRepository},
};

/// Builder for creating and configuring Planner instances.
#[derive(Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    repository: Option<Arc<dyn PlanRepository>>,
    catalog: Option<Catalog>,
    clock: Clock,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/weekendly/weekendly.db` or
    /// `~/.local/share/weekendly/weekendly.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given repository instead of SQLite. Takes precedence over
    /// any database path.
    pub fn with_repository(mut self, repository: Arc<dyn PlanRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Keeps plans in memory for the lifetime of the planner.
    pub fn in_memory(self) -> Self {
        self.with_repository(Arc::new(MemoryRepository::new()))
    }

    /// Replaces the built-in activity catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the clock used for slot assignment and timestamps.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if no default path can be found
    /// Returns `PlannerError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `PlannerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        let catalog = self.catalog.unwrap_or_else(Catalog::builtin);

        if let Some(repository) = self.repository {
            return Ok(Planner::new(repository, catalog, self.clock));
        }

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening plan database at {}", db_path.display());
        let repository = task::spawn_blocking(move || SqliteRepository::open(&db_path))
            .await
            .map_err(PlannerError::join)??;

        Ok(Planner::new(Arc::new(repository), catalog, self.clock))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("weekendly")
            .place_data_file("weekendly.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}
