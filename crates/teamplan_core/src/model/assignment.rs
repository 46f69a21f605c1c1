//! Assignment domain model.
//!
//! # Responsibility
//! - Define the record binding one person, one task and one schedule.
//!
//! # Invariants
//! - References are by-id relations, never embedded copies.
//! - `start_date`/`end_date` are denormalized from the referenced schedule
//!   at the moment of create/update and are not live-synchronized. A later
//!   schedule edit leaves existing assignments on their copied dates until
//!   they are explicitly re-saved.
//! - `uuid` is immutable once the record is persisted.

use crate::model::person::PersonId;
use crate::model::schedule::{Schedule, ScheduleId};
use crate::model::task::TaskId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an assignment record.
pub type AssignmentId = Uuid;

/// The binding of one person, one task and one schedule, with its own copied
/// validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub uuid: AssignmentId,
    pub person_uuid: PersonId,
    pub task_uuid: TaskId,
    pub schedule_uuid: ScheduleId,
    /// Copied from the referenced schedule at write time.
    pub start_date: NaiveDate,
    /// Copied from the referenced schedule at write time.
    pub end_date: NaiveDate,
    pub created_on: DateTime<Utc>,
    pub updated_on: Option<DateTime<Utc>>,
}

/// Create/update input for an assignment.
///
/// The populated `schedule` is the sole source of truth for the validity
/// window on both create and update; the draft deliberately has no date
/// fields of its own, so caller-set dates are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub person_id: PersonId,
    pub task_id: TaskId,
    /// Must be populated for create/update; absence is rejected because
    /// there is nothing to derive the validity window from.
    pub schedule: Option<Schedule>,
}
