//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from storage details.
//!
//! # Invariants
//! - Services hold no shared mutable state; every call runs to completion
//!   on the calling thread and performs at most one store write.
//! - Repositories arrive by constructor injection; there is no registry.

pub mod assignment_service;
pub mod person_service;
pub mod schedule_service;
pub mod task_service;
