//! Shared test helpers for in-memory task integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskwise::generation::{adapters::ScriptedTextGenerator, services::TaskGenerationService};
use taskwise::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::OwnerId,
    services::{CreateTaskRequest, TaskManagementService},
};

/// Service type wired to in-memory storage and a scripted generator.
pub type TestService =
    TaskManagementService<InMemoryTaskRepository, ScriptedTextGenerator, DefaultClock>;

/// Service plus handles to its collaborators.
pub struct Harness {
    pub service: TestService,
    pub repository: InMemoryTaskRepository,
    pub generator: ScriptedTextGenerator,
}

/// Builds a harness whose generator always fails to connect.
#[fixture]
pub fn harness() -> Harness {
    harness_with(ScriptedTextGenerator::unreachable())
}

/// Builds a harness around the supplied generator.
#[must_use]
pub fn harness_with(generator: ScriptedTextGenerator) -> Harness {
    let repository = InMemoryTaskRepository::new();
    let service = TaskManagementService::new(
        Arc::new(repository.clone()),
        TaskGenerationService::new(Arc::new(generator.clone())),
        Arc::new(DefaultClock),
    );
    Harness {
        service,
        repository,
        generator,
    }
}

/// Provides a fresh owner identity.
#[fixture]
pub fn owner() -> OwnerId {
    OwnerId::random()
}

/// Builds a minimal create request on the `Rust` topic.
#[must_use]
pub fn rust_task(title: &str) -> CreateTaskRequest {
    CreateTaskRequest::new(title, "Rust")
}
