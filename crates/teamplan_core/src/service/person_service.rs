//! Person use-case service.
//!
//! Thin store-and-return wrapper; the only logic here is identity and
//! timestamp stamping.

use crate::model::person::{Person, PersonDraft, PersonId};
use crate::repo::person_repo::PersonRepository;
use crate::repo::{RepoError, RepoResult};
use chrono::Utc;
use uuid::Uuid;

/// Use-case service wrapper for person CRUD operations.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a person from a draft, stamping `created_on`.
    pub fn create_person(&self, draft: &PersonDraft) -> RepoResult<Person> {
        let person = Person {
            uuid: Uuid::new_v4(),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            rank: draft.rank.clone(),
            kind: draft.kind.clone(),
            created_on: Utc::now(),
            updated_on: None,
        };

        self.repo.create_person(&person)?;
        Ok(person)
    }

    /// Overwrites an existing person's fields from a draft and stamps
    /// `updated_on`. The loaded existing record is what gets saved.
    pub fn update_person(&self, id: PersonId, incoming: &PersonDraft) -> RepoResult<Person> {
        let mut existing = self.repo.get_person(id)?.ok_or(RepoError::NotFound(id))?;

        existing.first_name = incoming.first_name.clone();
        existing.last_name = incoming.last_name.clone();
        existing.email = incoming.email.clone();
        existing.rank = incoming.rank.clone();
        existing.kind = incoming.kind.clone();
        existing.updated_on = Some(Utc::now());

        self.repo.update_person(&existing)?;
        Ok(existing)
    }

    /// Gets one person by stable ID.
    pub fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        self.repo.get_person(id)
    }

    /// Lists all persons in creation order.
    pub fn list_persons(&self) -> RepoResult<Vec<Person>> {
        self.repo.list_persons()
    }
}
