//! Repository port for owner-scoped task persistence.
//!
//! Every lookup and mutation except insertion takes the caller's
//! [`OwnerId`]. Implementations must match on both owner and task id, so a
//! task owned by someone else behaves exactly like a missing one.

use crate::task::domain::{OwnerId, Task, TaskChanges, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Stores several new tasks as one unit and returns the stored records
    /// in input order.
    ///
    /// Implementations that can guarantee atomicity must persist all tasks
    /// or none. Implementations that cannot must return only the records
    /// that were actually written, so callers can detect partial
    /// application.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when any task ID already
    /// exists, in which case nothing is written.
    async fn store_batch(&self, tasks: &[Task]) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks owned by `owner_id`, newest first.
    async fn list_by_owner(&self, owner_id: OwnerId) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier within the owner's tasks.
    ///
    /// Returns `None` when the task does not exist or belongs to another
    /// owner.
    async fn find_by_owner(
        &self,
        owner_id: OwnerId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Applies `changes` to the owner's task and returns the updated record.
    ///
    /// Returns `None` when no row matched the owner and identifier.
    async fn update_for_owner(
        &self,
        owner_id: OwnerId,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes the owner's task and returns the removed record.
    ///
    /// Returns `None` when no row matched the owner and identifier.
    async fn delete_for_owner(
        &self,
        owner_id: OwnerId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
