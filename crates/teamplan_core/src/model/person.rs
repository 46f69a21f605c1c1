//! Person domain model.
//!
//! # Responsibility
//! - Define the person record referenced (never owned) by assignments.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another person.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a person record.
pub type PersonId = Uuid;

/// A person that can be assigned to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable global ID used for assignment references.
    pub uuid: PersonId,
    pub first_name: String,
    pub last_name: String,
    /// Contact address.
    pub email: String,
    /// Seniority label, free-form.
    pub rank: String,
    /// Membership classification. Serialized as `type` to match external
    /// schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: Option<DateTime<Utc>>,
}

/// Create/update input for a person. Carries everything except identity and
/// timestamps, which the service owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub rank: String,
    pub kind: String,
}
