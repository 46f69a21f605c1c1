//! Person repository contract and SQLite implementation.
//!
//! Store-and-return persistence only; persons carry no derived state.

use crate::model::person::{Person, PersonId};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

const PERSON_SELECT_SQL: &str = "SELECT
    uuid,
    first_name,
    last_name,
    email,
    rank,
    type,
    created_on,
    updated_on
FROM persons";

const PERSON_COLUMNS: &[&str] = &[
    "uuid",
    "first_name",
    "last_name",
    "email",
    "rank",
    "type",
    "created_on",
    "updated_on",
];

/// Repository interface for person persistence.
pub trait PersonRepository {
    fn create_person(&self, person: &Person) -> RepoResult<PersonId>;
    fn update_person(&self, person: &Person) -> RepoResult<()>;
    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>>;
    fn list_persons(&self) -> RepoResult<Vec<Person>>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "persons", PERSON_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn create_person(&self, person: &Person) -> RepoResult<PersonId> {
        self.conn.execute(
            "INSERT INTO persons (
                uuid,
                first_name,
                last_name,
                email,
                rank,
                type,
                created_on,
                updated_on
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                person.uuid.to_string(),
                person.first_name.as_str(),
                person.last_name.as_str(),
                person.email.as_str(),
                person.rank.as_str(),
                person.kind.as_str(),
                person.created_on,
                person.updated_on,
            ],
        )?;

        Ok(person.uuid)
    }

    fn update_person(&self, person: &Person) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE persons
             SET
                first_name = ?1,
                last_name = ?2,
                email = ?3,
                rank = ?4,
                type = ?5,
                updated_on = ?6
             WHERE uuid = ?7;",
            params![
                person.first_name.as_str(),
                person.last_name.as_str(),
                person.email.as_str(),
                person.rank.as_str(),
                person.kind.as_str(),
                person.updated_on,
                person.uuid.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(person.uuid));
        }

        Ok(())
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_person_row(row)?));
        }

        Ok(None)
    }

    fn list_persons(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PERSON_SELECT_SQL} ORDER BY created_on ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut persons = Vec::new();
        while let Some(row) = rows.next()? {
            persons.push(parse_person_row(row)?);
        }

        Ok(persons)
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let uuid_text: String = row.get("uuid")?;
    let created_on: DateTime<Utc> = row.get("created_on")?;
    let updated_on: Option<DateTime<Utc>> = row.get("updated_on")?;

    Ok(Person {
        uuid: parse_uuid(&uuid_text, "persons.uuid")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        rank: row.get("rank")?,
        kind: row.get("type")?,
        created_on,
        updated_on,
    })
}
