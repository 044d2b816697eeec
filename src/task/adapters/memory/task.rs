//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{OwnerId, Task, TaskChanges, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Batch inserts hold a single write lock, so they are atomic. Listing
/// breaks `created_at` ties by insertion order, newest insert first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
}

impl InMemoryTaskState {
    fn insert(&mut self, task: &Task) {
        self.insertion_order.push(task.id());
        self.tasks.insert(task.id(), task.clone());
    }

    fn owned_mut(&mut self, owner_id: OwnerId, id: TaskId) -> Option<&mut Task> {
        self.tasks
            .get_mut(&id)
            .filter(|task| task.is_owned_by(owner_id))
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks across all owners.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the lock is poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.tasks.len())
    }

    /// Returns `true` when no tasks are stored.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the lock is poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.read()?.tasks.is_empty())
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.insert(task);
        Ok(task.clone())
    }

    async fn store_batch(&self, tasks: &[Task]) -> TaskRepositoryResult<Vec<Task>> {
        let mut state = self.write()?;
        let mut seen = Vec::with_capacity(tasks.len());
        for task in tasks {
            if state.tasks.contains_key(&task.id()) || seen.contains(&task.id()) {
                return Err(TaskRepositoryError::DuplicateTask(task.id()));
            }
            seen.push(task.id());
        }
        for task in tasks {
            state.insert(task);
        }
        Ok(tasks.to_vec())
    }

    async fn list_by_owner(&self, owner_id: OwnerId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut owned: Vec<Task> = state
            .insertion_order
            .iter()
            .rev()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| task.is_owned_by(owner_id))
            .cloned()
            .collect();
        owned.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        Ok(owned)
    }

    async fn find_by_owner(
        &self,
        owner_id: OwnerId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .get(&id)
            .filter(|task| task.is_owned_by(owner_id))
            .cloned())
    }

    async fn update_for_owner(
        &self,
        owner_id: OwnerId,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.write()?;
        Ok(state.owned_mut(owner_id, id).map(|task| {
            task.apply(changes);
            task.clone()
        }))
    }

    async fn delete_for_owner(
        &self,
        owner_id: OwnerId,
        id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.write()?;
        if state.owned_mut(owner_id, id).is_none() {
            return Ok(None);
        }
        state.insertion_order.retain(|existing| *existing != id);
        Ok(state.tasks.remove(&id))
    }
}
