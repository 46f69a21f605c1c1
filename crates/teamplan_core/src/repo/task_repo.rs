//! Task repository contract and SQLite implementation.

use crate::model::task::{Task, TaskId};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    description,
    created_on,
    updated_on
FROM tasks";

const TASK_COLUMNS: &[&str] = &["uuid", "name", "description", "created_on", "updated_on"];

/// Repository interface for task persistence.
pub trait TaskRepository {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    fn update_task(&self, task: &Task) -> RepoResult<()>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "tasks", TASK_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        self.conn.execute(
            "INSERT INTO tasks (
                uuid,
                name,
                description,
                created_on,
                updated_on
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                task.uuid.to_string(),
                task.name.as_str(),
                task.description.as_str(),
                task.created_on,
                task.updated_on,
            ],
        )?;

        Ok(task.uuid)
    }

    fn update_task(&self, task: &Task) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                name = ?1,
                description = ?2,
                updated_on = ?3
             WHERE uuid = ?4;",
            params![
                task.name.as_str(),
                task.description.as_str(),
                task.updated_on,
                task.uuid.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(task.uuid));
        }

        Ok(())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL} ORDER BY created_on ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let created_on: DateTime<Utc> = row.get("created_on")?;
    let updated_on: Option<DateTime<Utc>> = row.get("updated_on")?;

    Ok(Task {
        uuid: parse_uuid(&uuid_text, "tasks.uuid")?,
        name: row.get("name")?,
        description: row.get("description")?,
        created_on,
        updated_on,
    })
}
