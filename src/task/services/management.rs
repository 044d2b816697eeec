//! Owner-scoped task management service.

use super::{CreateTaskRequest, UpdateTaskRequest};
use crate::generation::{
    domain::GeneratedTaskSuggestions,
    ports::TextGenerator,
    services::{GenerationError, TaskGenerationService},
};
use crate::task::{
    domain::{CategoryGroups, OwnerId, Task, TaskDomainError, TaskId, TaskStats},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task management operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// One entry of a batch failed validation; nothing was written.
    #[error("batch entry {index} is invalid: {source}")]
    InvalidBatchEntry {
        /// Zero-based position of the rejected entry.
        index: usize,
        /// Validation failure for that entry.
        #[source]
        source: TaskDomainError,
    },
    /// The caller owns no task with this identifier.
    ///
    /// Raised identically for missing tasks and tasks owned by someone else.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// The store wrote only part of a batch.
    #[error("batch insert persisted {persisted} of {requested} tasks")]
    PartialBatch {
        /// Number of tasks submitted.
        requested: usize,
        /// Number of tasks the store reports as written.
        persisted: usize,
    },
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Task suggestion rejected the request.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl TaskServiceError {
    /// Returns `true` for the not-found classification.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` when the caller supplied invalid input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidBatchEntry { .. }
                | Self::Generation(GenerationError::EmptyTopic)
        )
    }
}

/// Result type for task management operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task management orchestration service.
///
/// Every operation takes the caller's [`OwnerId`]. Reads and writes only
/// ever touch that owner's tasks, and a task owned by someone else is
/// reported exactly like a missing one.
#[derive(Clone)]
pub struct TaskManagementService<R, G, C>
where
    R: TaskRepository,
    G: TextGenerator,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    generation: TaskGenerationService<G>,
    clock: Arc<C>,
}

impl<R, G, C> TaskManagementService<R, G, C>
where
    R: TaskRepository,
    G: TextGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a new task management service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        generation: TaskGenerationService<G>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            generation,
            clock,
        }
    }

    /// Suggests learning tasks for `topic`, falling back to fixed templates
    /// when the text generator is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Generation`] only when the topic is blank.
    pub async fn generate(
        &self,
        owner_id: OwnerId,
        topic: &str,
    ) -> TaskServiceResult<GeneratedTaskSuggestions> {
        let suggestions = self.generation.generate_with_fallback(topic).await?;
        tracing::debug!(
            %owner_id,
            topic = suggestions.topic(),
            fallback = suggestions.is_fallback(),
            "generated task suggestions"
        );
        Ok(suggestions)
    }

    /// Creates a task owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for invalid input and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        owner_id: OwnerId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let draft = request.into_draft()?;
        let task = Task::new(owner_id, draft, &*self.clock);
        let stored = self.repository.store(&task).await?;
        tracing::info!(%owner_id, task_id = %stored.id(), "task created");
        Ok(stored)
    }

    /// Creates several tasks owned by `owner_id` in one batch.
    ///
    /// Every entry is validated before anything is written. The batch is
    /// stored as a unit; a store that reports fewer records than submitted
    /// yields [`TaskServiceError::PartialBatch`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidBatchEntry`] for the first invalid
    /// entry, [`TaskServiceError::PartialBatch`] on partial application, and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_many(
        &self,
        owner_id: OwnerId,
        requests: Vec<CreateTaskRequest>,
    ) -> TaskServiceResult<Vec<Task>> {
        let tasks = requests
            .into_iter()
            .enumerate()
            .map(|(index, request)| {
                request
                    .into_draft()
                    .map(|draft| Task::new(owner_id, draft, &*self.clock))
                    .map_err(|source| TaskServiceError::InvalidBatchEntry { index, source })
            })
            .collect::<TaskServiceResult<Vec<Task>>>()?;
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let stored = self.repository.store_batch(&tasks).await?;
        if stored.len() != tasks.len() {
            tracing::error!(
                %owner_id,
                requested = tasks.len(),
                persisted = stored.len(),
                "task batch partially applied"
            );
            return Err(TaskServiceError::PartialBatch {
                requested: tasks.len(),
                persisted: stored.len(),
            });
        }
        tracing::info!(%owner_id, count = stored.len(), "task batch created");
        Ok(stored)
    }

    /// Lists the owner's tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn list(&self, owner_id: OwnerId) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list_by_owner(owner_id).await?)
    }

    /// Returns the owner's task with `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is missing or
    /// owned by someone else, and [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn get_by_id(&self, owner_id: OwnerId, task_id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_owner(owner_id, task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))
    }

    /// Applies a partial update to the owner's task.
    ///
    /// Ownership is checked before the request is validated, so a foreign
    /// or missing task always yields not-found. `updated_at` is refreshed
    /// even when the request changes nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is missing,
    /// foreign, or deleted concurrently; [`TaskServiceError::Validation`]
    /// for invalid fields; and [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn update(
        &self,
        owner_id: OwnerId,
        task_id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let existing = self.get_by_id(owner_id, task_id).await?;
        let updated_at = self.clock.utc().max(existing.created_at());
        let changes = request.into_changes(updated_at)?;
        self.repository
            .update_for_owner(owner_id, task_id, &changes)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))
    }

    /// Deletes the owner's task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task is missing,
    /// foreign, or deleted concurrently, and [`TaskServiceError::Repository`]
    /// when persistence fails.
    pub async fn delete(&self, owner_id: OwnerId, task_id: TaskId) -> TaskServiceResult<()> {
        self.get_by_id(owner_id, task_id).await?;
        self.repository
            .delete_for_owner(owner_id, task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;
        tracing::info!(%owner_id, %task_id, "task deleted");
        Ok(())
    }

    /// Computes completion statistics over the owner's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn stats(&self, owner_id: OwnerId) -> TaskServiceResult<TaskStats> {
        let tasks = self.list(owner_id).await?;
        Ok(TaskStats::from_tasks(&tasks))
    }

    /// Groups the owner's tasks by category.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn by_category(&self, owner_id: OwnerId) -> TaskServiceResult<CategoryGroups> {
        let tasks = self.list(owner_id).await?;
        Ok(CategoryGroups::from_tasks(tasks))
    }
}
