//! Task use-case service.

use crate::model::task::{Task, TaskDraft, TaskId};
use crate::repo::task_repo::TaskRepository;
use crate::repo::{RepoError, RepoResult};
use chrono::Utc;
use uuid::Uuid;

/// Use-case service wrapper for task CRUD operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a task from a draft, stamping `created_on`.
    pub fn create_task(&self, draft: &TaskDraft) -> RepoResult<Task> {
        let task = Task {
            uuid: Uuid::new_v4(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            created_on: Utc::now(),
            updated_on: None,
        };

        self.repo.create_task(&task)?;
        Ok(task)
    }

    /// Overwrites an existing task's fields from a draft and stamps
    /// `updated_on`.
    pub fn update_task(&self, id: TaskId, incoming: &TaskDraft) -> RepoResult<Task> {
        let mut existing = self.repo.get_task(id)?.ok_or(RepoError::NotFound(id))?;

        existing.name = incoming.name.clone();
        existing.description = incoming.description.clone();
        existing.updated_on = Some(Utc::now());

        self.repo.update_task(&existing)?;
        Ok(existing)
    }

    /// Gets one task by stable ID.
    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.repo.get_task(id)
    }

    /// Lists all tasks in creation order.
    pub fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks()
    }
}
