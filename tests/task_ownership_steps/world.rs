//! Shared world state for task ownership BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskwise::generation::{adapters::ScriptedTextGenerator, services::TaskGenerationService};
use taskwise::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{CategoryGroups, OwnerId, Task, TaskStats},
    services::{TaskManagementService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskManagementService<InMemoryTaskRepository, ScriptedTextGenerator, DefaultClock>;

/// Scenario world for task ownership behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub owners: HashMap<String, OwnerId>,
    pub tasks_by_title: HashMap<String, Task>,
    pub last_task: Option<Task>,
    pub last_error: Option<TaskServiceError>,
    pub last_listing: Option<Vec<Task>>,
    pub last_groups: Option<CategoryGroups>,
    pub last_stats: Option<TaskStats>,
}

impl TaskWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskManagementService::new(
            Arc::new(InMemoryTaskRepository::new()),
            TaskGenerationService::new(Arc::new(ScriptedTextGenerator::unreachable())),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            owners: HashMap::new(),
            tasks_by_title: HashMap::new(),
            last_task: None,
            last_error: None,
            last_listing: None,
            last_groups: None,
            last_stats: None,
        }
    }

    /// Returns the identity for a named owner, minting one on first use.
    pub fn owner(&mut self, name: &str) -> OwnerId {
        *self
            .owners
            .entry(name.to_owned())
            .or_insert_with(OwnerId::random)
    }

    /// Returns the most recently created task.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created in this scenario.
    pub fn last_task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Records an operation outcome, keeping only the error.
    pub fn record<T>(&mut self, result: Result<T, TaskServiceError>) -> Option<T> {
        result.map_err(|err| self.last_error = Some(err)).ok()
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
