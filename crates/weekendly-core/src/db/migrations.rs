//! Database schema initialization and migrations.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

/// Version stamped into `PRAGMA user_version` once the schema is current.
const SCHEMA_VERSION: i64 = 1;

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&mut self) -> Result<()> {
        // Foreign keys are per connection; cascading deletes rely on them.
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let version: i64 = self
            .connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")?;
        if version >= SCHEMA_VERSION {
            return Ok(());
        }

        debug!("Migrating plan database from schema version {version} to {SCHEMA_VERSION}");

        let schema_sql = include_str!("../../assets/schema.sql");
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin migration")?;
        tx.execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;
        tx.pragma_update(None, "user_version", SCHEMA_VERSION)
            .db_context("Failed to record schema version")?;
        tx.commit().db_context("Failed to commit migration")?;

        Ok(())
    }
}
