//! Domain model for people, tasks, schedules and assignments.
//!
//! # Responsibility
//! - Define the canonical entity records persisted by the repository layer.
//! - Define per-call draft records used as create/update input.
//!
//! # Invariants
//! - Every entity is identified by a stable `Uuid` generated at construction.
//! - `created_on` is stamped exactly once; `updated_on` only on later writes.
//! - Drafts are plain values; services never mutate a caller-held record.

pub mod assignment;
pub mod person;
pub mod schedule;
pub mod task;
