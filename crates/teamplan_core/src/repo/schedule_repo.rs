//! Schedule repository contract and SQLite implementation.
//!
//! Only the typed date window is persisted; the raw date text that arrives
//! on a draft never reaches this layer.

use crate::model::schedule::{Schedule, ScheduleId};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Row};

const SCHEDULE_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    description,
    type,
    start_date,
    end_date,
    created_on,
    updated_on
FROM schedules";

const SCHEDULE_COLUMNS: &[&str] = &[
    "uuid",
    "name",
    "description",
    "type",
    "start_date",
    "end_date",
    "created_on",
    "updated_on",
];

/// Repository interface for schedule persistence.
pub trait ScheduleRepository {
    fn create_schedule(&self, schedule: &Schedule) -> RepoResult<ScheduleId>;
    fn update_schedule(&self, schedule: &Schedule) -> RepoResult<()>;
    fn get_schedule(&self, id: ScheduleId) -> RepoResult<Option<Schedule>>;
    fn list_schedules(&self) -> RepoResult<Vec<Schedule>>;
}

/// SQLite-backed schedule repository.
pub struct SqliteScheduleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteScheduleRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "schedules", SCHEDULE_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ScheduleRepository for SqliteScheduleRepository<'_> {
    fn create_schedule(&self, schedule: &Schedule) -> RepoResult<ScheduleId> {
        self.conn.execute(
            "INSERT INTO schedules (
                uuid,
                name,
                description,
                type,
                start_date,
                end_date,
                created_on,
                updated_on
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                schedule.uuid.to_string(),
                schedule.name.as_str(),
                schedule.description.as_str(),
                schedule.kind.as_str(),
                schedule.start_date,
                schedule.end_date,
                schedule.created_on,
                schedule.updated_on,
            ],
        )?;

        Ok(schedule.uuid)
    }

    fn update_schedule(&self, schedule: &Schedule) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE schedules
             SET
                name = ?1,
                description = ?2,
                type = ?3,
                start_date = ?4,
                end_date = ?5,
                updated_on = ?6
             WHERE uuid = ?7;",
            params![
                schedule.name.as_str(),
                schedule.description.as_str(),
                schedule.kind.as_str(),
                schedule.start_date,
                schedule.end_date,
                schedule.updated_on,
                schedule.uuid.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(schedule.uuid));
        }

        Ok(())
    }

    fn get_schedule(&self, id: ScheduleId) -> RepoResult<Option<Schedule>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SCHEDULE_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_schedule_row(row)?));
        }

        Ok(None)
    }

    fn list_schedules(&self) -> RepoResult<Vec<Schedule>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SCHEDULE_SELECT_SQL} ORDER BY created_on ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut schedules = Vec::new();
        while let Some(row) = rows.next()? {
            schedules.push(parse_schedule_row(row)?);
        }

        Ok(schedules)
    }
}

fn parse_schedule_row(row: &Row<'_>) -> RepoResult<Schedule> {
    let uuid_text: String = row.get("uuid")?;
    let start_date: NaiveDate = row.get("start_date")?;
    let end_date: NaiveDate = row.get("end_date")?;
    let created_on: DateTime<Utc> = row.get("created_on")?;
    let updated_on: Option<DateTime<Utc>> = row.get("updated_on")?;

    Ok(Schedule {
        uuid: parse_uuid(&uuid_text, "schedules.uuid")?,
        name: row.get("name")?,
        description: row.get("description")?,
        kind: row.get("type")?,
        start_date,
        end_date,
        created_on,
        updated_on,
    })
}
