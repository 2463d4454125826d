//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::{Value, json};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task},
    ports::TaskValidator,
    services::TaskLifecycleService,
    validation::DefaultTaskValidator,
};

/// Service type used by the in-memory tests.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a lifecycle service over an empty repository.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides the default validator.
#[fixture]
pub fn validator() -> DefaultTaskValidator {
    DefaultTaskValidator::new()
}

/// Returns a valid creation payload named `name`.
#[must_use]
pub fn task_payload(name: &str) -> Value {
    json!({
        "name": name,
        "details": "Generated by the in-memory test suite",
        "status": "To Do",
        "priority": "Medium",
        "startDate": "2024-06-01T08:00:00Z",
        "dueDate": "2024-06-04T17:00:00Z"
    })
}

/// Validates [`task_payload`] into a creation payload.
///
/// # Errors
///
/// Returns an error if the payload fails validation.
pub fn new_task(name: &str) -> Result<NewTask, eyre::Report> {
    DefaultTaskValidator::new()
        .validate_create(&task_payload(name))
        .map_err(|err| eyre::eyre!("fixture payload rejected: {err}"))
}

/// Builds an unsaved task named `name`.
///
/// # Errors
///
/// Returns an error if the payload fails validation.
pub fn unsaved_task(name: &str) -> Result<Task, eyre::Report> {
    Ok(Task::new(new_task(name)?, &DefaultClock))
}
