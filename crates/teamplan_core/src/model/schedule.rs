//! Schedule domain model.
//!
//! # Responsibility
//! - Define the named time window that backs assignments.
//!
//! # Invariants
//! - `start_date`/`end_date` are the authoritative typed window. Raw date
//!   text exists only on [`ScheduleDraft`] and is parsed once at
//!   create/update, never persisted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a schedule record.
pub type ScheduleId = Uuid;

/// A named calendar window. One schedule can back multiple assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub uuid: ScheduleId,
    pub name: String,
    pub description: String,
    /// Schedule classification. Serialized as `type` to match external
    /// schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_on: DateTime<Utc>,
    pub updated_on: Option<DateTime<Utc>>,
}

/// Create/update input for a schedule.
///
/// The window arrives as raw `YYYY-MM-DD` text; the schedule service parses
/// it into the typed fields before anything is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub name: String,
    pub description: String,
    pub kind: String,
    pub start_date_text: String,
    pub end_date_text: String,
}
