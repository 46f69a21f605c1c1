//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository constructors verify schema readiness before first use.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod assignment_repo;
pub mod person_repo;
pub mod schedule_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// No record exists for the requested id.
    NotFound(Uuid),
    /// A persisted row cannot be decoded into its entity record.
    InvalidData(String),
    /// The connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it via db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{column}` on table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Verifies that `conn` is migrated and carries the given table/columns.
///
/// Called by every repository constructor so query failures surface as
/// schema errors up front instead of opaque SQL errors later.
pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for column in columns {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

pub(crate) fn parse_uuid(value: &str, context: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {context}")))
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
