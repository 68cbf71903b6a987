//! SQLite persistence for weekend plans.
//!
//! [`Database`] wraps a single connection and knows the SQL. Plans are stored
//! in a `plans` table with one row per scheduled activity in
//! `scheduled_activities`; deleting a plan cascades to its activities.
//!
//! [`SqliteRepository`] adapts the database to the
//! [`PlanRepository`](crate::repository::PlanRepository) trait. It opens a
//! fresh connection per call, which keeps it `Send + Sync` and lets the
//! planner use it from blocking worker threads.

use std::path::{Path, PathBuf};

use log::debug;
use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::WeekendPlan,
    repository::PlanRepository,
};

pub mod migrations;
pub mod plan_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let mut db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// [`PlanRepository`] backed by a SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    path: PathBuf,
}

impl SqliteRepository {
    /// Opens (creating if needed) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Database` if the file cannot be opened or the
    /// schema cannot be applied.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        Database::new(&path)?;
        Ok(Self { path })
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Database> {
        Database::new(&self.path)
    }
}

impl PlanRepository for SqliteRepository {
    fn load(&self, id: &str) -> Result<Option<WeekendPlan>> {
        self.connect()?.load_plan(id)
    }

    fn save(&self, plan: &WeekendPlan) -> Result<()> {
        debug!("Saving plan {} ({} activities)", plan.id, plan.len());
        self.connect()?.save_plan(plan)
    }

    fn delete(&self, id: &str) -> Result<bool> {
        debug!("Deleting plan {id}");
        self.connect()?.delete_plan(id)
    }

    fn list(&self) -> Result<Vec<WeekendPlan>> {
        self.connect()?.list_plans()
    }
}
