//! Assignment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `assignments` storage.
//! - Own the one range predicate of the system: list by start date between
//!   two inclusive bounds.
//!
//! # Invariants
//! - The range predicate tests `start_date` only; `end_date` is never
//!   consulted.
//! - Listing order is deterministic: creation order, uuid as tiebreak.

use crate::model::assignment::{Assignment, AssignmentId};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Row};

const ASSIGNMENT_SELECT_SQL: &str = "SELECT
    uuid,
    person_uuid,
    task_uuid,
    schedule_uuid,
    start_date,
    end_date,
    created_on,
    updated_on
FROM assignments";

const ASSIGNMENT_COLUMNS: &[&str] = &[
    "uuid",
    "person_uuid",
    "task_uuid",
    "schedule_uuid",
    "start_date",
    "end_date",
    "created_on",
    "updated_on",
];

/// Repository interface for assignment persistence.
pub trait AssignmentRepository {
    fn create_assignment(&self, assignment: &Assignment) -> RepoResult<AssignmentId>;
    fn update_assignment(&self, assignment: &Assignment) -> RepoResult<()>;
    fn get_assignment(&self, id: AssignmentId) -> RepoResult<Option<Assignment>>;
    fn list_assignments(&self) -> RepoResult<Vec<Assignment>>;
    /// Lists assignments whose `start_date` lies in `[start, end]`.
    fn find_by_start_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Assignment>>;
}

/// SQLite-backed assignment repository.
pub struct SqliteAssignmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAssignmentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "assignments", ASSIGNMENT_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl AssignmentRepository for SqliteAssignmentRepository<'_> {
    fn create_assignment(&self, assignment: &Assignment) -> RepoResult<AssignmentId> {
        self.conn.execute(
            "INSERT INTO assignments (
                uuid,
                person_uuid,
                task_uuid,
                schedule_uuid,
                start_date,
                end_date,
                created_on,
                updated_on
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                assignment.uuid.to_string(),
                assignment.person_uuid.to_string(),
                assignment.task_uuid.to_string(),
                assignment.schedule_uuid.to_string(),
                assignment.start_date,
                assignment.end_date,
                assignment.created_on,
                assignment.updated_on,
            ],
        )?;

        Ok(assignment.uuid)
    }

    fn update_assignment(&self, assignment: &Assignment) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE assignments
             SET
                person_uuid = ?1,
                task_uuid = ?2,
                schedule_uuid = ?3,
                start_date = ?4,
                end_date = ?5,
                updated_on = ?6
             WHERE uuid = ?7;",
            params![
                assignment.person_uuid.to_string(),
                assignment.task_uuid.to_string(),
                assignment.schedule_uuid.to_string(),
                assignment.start_date,
                assignment.end_date,
                assignment.updated_on,
                assignment.uuid.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(assignment.uuid));
        }

        Ok(())
    }

    fn get_assignment(&self, id: AssignmentId) -> RepoResult<Option<Assignment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ASSIGNMENT_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_assignment_row(row)?));
        }

        Ok(None)
    }

    fn list_assignments(&self) -> RepoResult<Vec<Assignment>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ASSIGNMENT_SELECT_SQL} ORDER BY created_on ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut assignments = Vec::new();
        while let Some(row) = rows.next()? {
            assignments.push(parse_assignment_row(row)?);
        }

        Ok(assignments)
    }

    fn find_by_start_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Assignment>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ASSIGNMENT_SELECT_SQL}
             WHERE start_date BETWEEN ?1 AND ?2
             ORDER BY created_on ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query(params![start, end])?;
        let mut assignments = Vec::new();
        while let Some(row) = rows.next()? {
            assignments.push(parse_assignment_row(row)?);
        }

        Ok(assignments)
    }
}

fn parse_assignment_row(row: &Row<'_>) -> RepoResult<Assignment> {
    let uuid_text: String = row.get("uuid")?;
    let person_text: String = row.get("person_uuid")?;
    let task_text: String = row.get("task_uuid")?;
    let schedule_text: String = row.get("schedule_uuid")?;

    let start_date: NaiveDate = row.get("start_date")?;
    let end_date: NaiveDate = row.get("end_date")?;
    let created_on: DateTime<Utc> = row.get("created_on")?;
    let updated_on: Option<DateTime<Utc>> = row.get("updated_on")?;

    Ok(Assignment {
        uuid: parse_uuid(&uuid_text, "assignments.uuid")?,
        person_uuid: parse_uuid(&person_text, "assignments.person_uuid")?,
        task_uuid: parse_uuid(&task_text, "assignments.task_uuid")?,
        schedule_uuid: parse_uuid(&schedule_text, "assignments.schedule_uuid")?,
        start_date,
        end_date,
        created_on,
        updated_on,
    })
}
