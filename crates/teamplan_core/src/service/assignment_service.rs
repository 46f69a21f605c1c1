//! Assignment use-case service.
//!
//! # Responsibility
//! - Own create/update/lookup/search of assignment records.
//! - Derive the assignment validity window from the referenced schedule.
//!
//! # Invariants
//! - The draft's populated schedule is the sole source of dates on both
//!   create and update; the dates are copied at write time, not kept in
//!   sync with later schedule edits.
//! - Update mutates and saves the loaded existing record, never the
//!   incoming draft.
//! - Every create/update performs exactly one store write.

use crate::model::assignment::{Assignment, AssignmentDraft, AssignmentId};
use crate::repo::assignment_repo::AssignmentRepository;
use crate::repo::RepoError;
use crate::search::date_range::{
    resolve_start_date_filter, AssignmentSearchRequest, DateTextError, StartDateFilter,
};
use chrono::Utc;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Service error for assignment use-cases.
#[derive(Debug)]
pub enum AssignmentServiceError {
    /// Target assignment does not exist.
    AssignmentNotFound(AssignmentId),
    /// The draft carries no schedule, so there is nothing to derive the
    /// validity window from.
    MissingSchedule,
    /// A search query's date text failed to parse.
    InvalidDateText(DateTextError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for AssignmentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssignmentNotFound(id) => write!(f, "assignment not found: {id}"),
            Self::MissingSchedule => {
                write!(f, "assignment draft has no schedule to derive dates from")
            }
            Self::InvalidDateText(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AssignmentServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDateText(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AssignmentServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::AssignmentNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<DateTextError> for AssignmentServiceError {
    fn from(value: DateTextError) -> Self {
        Self::InvalidDateText(value)
    }
}

/// Assignment service facade over repository implementations.
pub struct AssignmentService<R: AssignmentRepository> {
    repo: R,
}

impl<R: AssignmentRepository> AssignmentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored assignment in creation order.
    pub fn list_assignments(&self) -> Result<Vec<Assignment>, AssignmentServiceError> {
        Ok(self.repo.list_assignments()?)
    }

    /// Gets one assignment by stable ID.
    pub fn get_assignment(
        &self,
        id: AssignmentId,
    ) -> Result<Assignment, AssignmentServiceError> {
        self.repo
            .get_assignment(id)?
            .ok_or(AssignmentServiceError::AssignmentNotFound(id))
    }

    /// Creates an assignment from a draft with a populated schedule.
    ///
    /// # Contract
    /// - Copies the schedule's start/end date onto the new record.
    /// - Stamps `created_on`; `updated_on` stays unset.
    /// - Returns the stored record.
    pub fn create_assignment(
        &self,
        draft: &AssignmentDraft,
    ) -> Result<Assignment, AssignmentServiceError> {
        let schedule = draft
            .schedule
            .as_ref()
            .ok_or(AssignmentServiceError::MissingSchedule)?;

        let assignment = Assignment {
            uuid: Uuid::new_v4(),
            person_uuid: draft.person_id,
            task_uuid: draft.task_id,
            schedule_uuid: schedule.uuid,
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            created_on: Utc::now(),
            updated_on: None,
        };

        self.repo.create_assignment(&assignment)?;
        Ok(assignment)
    }

    /// Updates an existing assignment from an incoming draft.
    ///
    /// # Contract
    /// - Loads the existing record first; an unknown id fails without any
    ///   write.
    /// - Overwrites the person/task/schedule references and copies the
    ///   incoming schedule's dates onto the existing record.
    /// - Stamps `updated_on` and persists the mutated existing record.
    pub fn update_assignment(
        &self,
        id: AssignmentId,
        incoming: &AssignmentDraft,
    ) -> Result<Assignment, AssignmentServiceError> {
        let mut existing = self
            .repo
            .get_assignment(id)?
            .ok_or(AssignmentServiceError::AssignmentNotFound(id))?;

        let schedule = incoming
            .schedule
            .as_ref()
            .ok_or(AssignmentServiceError::MissingSchedule)?;

        existing.person_uuid = incoming.person_id;
        existing.task_uuid = incoming.task_id;
        existing.schedule_uuid = schedule.uuid;
        existing.start_date = schedule.start_date;
        existing.end_date = schedule.end_date;
        existing.updated_on = Some(Utc::now());

        self.repo.update_assignment(&existing)?;
        Ok(existing)
    }

    /// Searches assignments by a textual start-date range.
    ///
    /// A fully absent range returns the unfiltered listing; otherwise both
    /// bounds must parse before the store is consulted. Only the
    /// assignment's start date is tested against the inclusive bounds.
    pub fn search_assignments(
        &self,
        request: &AssignmentSearchRequest,
    ) -> Result<Vec<Assignment>, AssignmentServiceError> {
        match resolve_start_date_filter(request)? {
            StartDateFilter::Between { start, end } => {
                Ok(self.repo.find_by_start_date_between(start, end)?)
            }
            StartDateFilter::All => Ok(self.repo.list_assignments()?),
        }
    }
}
