//! Plan persistence queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{DayLabel, ScheduledActivity, WeekendPlan},
};

const UPSERT_PLAN_SQL: &str = "INSERT INTO plans (id, name, theme_id, extended, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
     ON CONFLICT(id) DO UPDATE SET name = excluded.name, theme_id = excluded.theme_id, \
     extended = excluded.extended, updated_at = excluded.updated_at";
const DELETE_PLAN_ACTIVITIES_SQL: &str = "DELETE FROM scheduled_activities WHERE plan_id = ?1";
const INSERT_ACTIVITY_SQL: &str = "INSERT INTO scheduled_activities \
     (id, plan_id, day, position, scheduled_time, data) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_PLAN_SQL: &str =
    "SELECT id, name, theme_id, extended, created_at, updated_at FROM plans WHERE id = ?1";
const SELECT_PLAN_IDS_SQL: &str = "SELECT id FROM plans";
const SELECT_ACTIVITIES_SQL: &str = "SELECT day, position, data FROM scheduled_activities \
     WHERE plan_id = ?1 ORDER BY position";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

fn parse_timestamp(value: &str, column: usize) -> rusqlite::Result<Timestamp> {
    value
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

fn parse_day(value: &str, column: usize) -> rusqlite::Result<DayLabel> {
    value.parse::<DayLabel>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })
}

impl super::Database {
    /// Inserts or replaces a plan together with all of its scheduled
    /// activities in one transaction.
    pub fn save_plan(&mut self, plan: &WeekendPlan) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_PLAN_SQL,
            params![
                plan.id,
                plan.name,
                plan.theme_id,
                plan.extended,
                plan.created_at.to_string(),
                plan.updated_at.to_string(),
            ],
        )
        .db_context("Failed to save plan")?;

        tx.execute(DELETE_PLAN_ACTIVITIES_SQL, params![plan.id])
            .db_context("Failed to clear scheduled activities")?;

        {
            let mut stmt = tx
                .prepare(INSERT_ACTIVITY_SQL)
                .db_context("Failed to prepare activity insert")?;
            for activity in plan.activities() {
                let data = serde_json::to_string(activity)?;
                stmt.execute(params![
                    activity.id,
                    plan.id,
                    activity.day.as_str(),
                    activity.order,
                    activity.scheduled_time.to_string(),
                    data,
                ])
                .db_context("Failed to insert scheduled activity")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Loads a plan and its scheduled activities.
    pub fn load_plan(&self, id: &str) -> Result<Option<WeekendPlan>> {
        let plan = self
            .connection
            .query_row(SELECT_PLAN_SQL, params![id], |row| {
                Ok(WeekendPlan {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    theme_id: row.get(2)?,
                    extended: row.get(3)?,
                    friday: Vec::new(),
                    saturday: Vec::new(),
                    sunday: Vec::new(),
                    monday: Vec::new(),
                    created_at: parse_timestamp(&row.get::<_, String>(4)?, 4)?,
                    updated_at: parse_timestamp(&row.get::<_, String>(5)?, 5)?,
                })
            })
            .optional()
            .db_context("Failed to query plan")?;

        let Some(mut plan) = plan else {
            return Ok(None);
        };

        let mut stmt = self
            .connection
            .prepare(SELECT_ACTIVITIES_SQL)
            .db_context("Failed to prepare query")?;
        let rows = stmt
            .query_map(params![id], |row| {
                Ok((
                    parse_day(&row.get::<_, String>(0)?, 0)?,
                    row.get::<_, u32>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .db_context("Failed to query scheduled activities")?;

        for row in rows {
            let (day, position, data) = row.db_context("Failed to read scheduled activity")?;
            let mut activity: ScheduledActivity = serde_json::from_str(&data)?;
            activity.day = day;
            activity.order = position;
            plan.day_mut(day).push(activity);
        }

        Ok(Some(plan))
    }

    /// Loads every stored plan, most recently updated first.
    pub fn list_plans(&self) -> Result<Vec<WeekendPlan>> {
        let ids = {
            let mut stmt = self
                .connection
                .prepare(SELECT_PLAN_IDS_SQL)
                .db_context("Failed to prepare query")?;
            let rows = stmt
                .query_map([], |row| row.get::<_, String>(0))
                .db_context("Failed to query plans")?;
            rows.collect::<rusqlite::Result<Vec<String>>>()
                .db_context("Failed to read plan IDs")?
        };

        let mut plans = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(plan) = self.load_plan(&id)? {
                plans.push(plan);
            }
        }
        plans.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.name.cmp(&b.name)));
        Ok(plans)
    }

    /// Deletes a plan; its scheduled activities go with it.
    ///
    /// Returns `false` if no plan had that ID.
    pub fn delete_plan(&self, id: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![id])
            .db_context("Failed to delete plan")?;
        Ok(deleted > 0)
    }
}
