//! Schedule use-case service.
//!
//! # Responsibility
//! - Provide schedule CRUD on top of the schedule repository.
//! - Parse the draft's raw date text into the typed window exactly once,
//!   before anything is persisted.
//!
//! # Invariants
//! - Date text failing to parse aborts the whole create/update; nothing is
//!   written.
//! - The raw text is discarded after parsing; only typed dates persist.

use crate::model::schedule::{Schedule, ScheduleDraft, ScheduleId};
use crate::repo::schedule_repo::ScheduleRepository;
use crate::repo::RepoError;
use crate::search::date_range::{parse_date_text, DateTextError};
use chrono::Utc;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Service error for schedule use-cases.
#[derive(Debug)]
pub enum ScheduleServiceError {
    /// Target schedule does not exist.
    ScheduleNotFound(ScheduleId),
    /// Draft date text failed to parse.
    InvalidDateText(DateTextError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ScheduleServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScheduleNotFound(id) => write!(f, "schedule not found: {id}"),
            Self::InvalidDateText(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ScheduleServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDateText(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::ScheduleNotFound(_) => None,
        }
    }
}

impl From<RepoError> for ScheduleServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::ScheduleNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<DateTextError> for ScheduleServiceError {
    fn from(value: DateTextError) -> Self {
        Self::InvalidDateText(value)
    }
}

/// Schedule service facade over repository implementations.
pub struct ScheduleService<R: ScheduleRepository> {
    repo: R,
}

impl<R: ScheduleRepository> ScheduleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a schedule from a draft, parsing its date text into the
    /// typed window and stamping `created_on`.
    pub fn create_schedule(
        &self,
        draft: &ScheduleDraft,
    ) -> Result<Schedule, ScheduleServiceError> {
        let start_date = parse_date_text("start_date", &draft.start_date_text)?;
        let end_date = parse_date_text("end_date", &draft.end_date_text)?;

        let schedule = Schedule {
            uuid: Uuid::new_v4(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            kind: draft.kind.clone(),
            start_date,
            end_date,
            created_on: Utc::now(),
            updated_on: None,
        };

        self.repo.create_schedule(&schedule)?;
        Ok(schedule)
    }

    /// Re-parses the incoming draft's date text and overwrites the loaded
    /// existing record, stamping `updated_on`.
    pub fn update_schedule(
        &self,
        id: ScheduleId,
        incoming: &ScheduleDraft,
    ) -> Result<Schedule, ScheduleServiceError> {
        let mut existing = self
            .repo
            .get_schedule(id)?
            .ok_or(ScheduleServiceError::ScheduleNotFound(id))?;

        existing.name = incoming.name.clone();
        existing.description = incoming.description.clone();
        existing.kind = incoming.kind.clone();
        existing.start_date = parse_date_text("start_date", &incoming.start_date_text)?;
        existing.end_date = parse_date_text("end_date", &incoming.end_date_text)?;
        existing.updated_on = Some(Utc::now());

        self.repo.update_schedule(&existing)?;
        Ok(existing)
    }

    /// Gets one schedule by stable ID.
    pub fn get_schedule(&self, id: ScheduleId) -> Result<Option<Schedule>, ScheduleServiceError> {
        Ok(self.repo.get_schedule(id)?)
    }

    /// Lists all schedules in creation order.
    pub fn list_schedules(&self) -> Result<Vec<Schedule>, ScheduleServiceError> {
        Ok(self.repo.list_schedules()?)
    }
}
