//! Shared world state for update-time business rule scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
    validation::DefaultTaskValidator,
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for update-time business rules.
pub struct TaskUpdateWorld {
    pub service: TestTaskService,
    pub validator: DefaultTaskValidator,
    pub stored_task: Option<Task>,
    pub last_update_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskUpdateWorld {
    /// Creates a world with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            validator: DefaultTaskValidator::new(),
            stored_task: None,
            last_update_result: None,
        }
    }

    /// Returns the task stored by a `Given` step.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been stored yet.
    pub fn stored_task(&self) -> Result<&Task, eyre::Report> {
        self.stored_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))
    }

    /// Returns the outcome recorded by a `When` step.
    ///
    /// # Errors
    ///
    /// Returns an error when no update has been attempted yet.
    pub fn last_update_result(&self) -> Result<&Result<Task, TaskLifecycleError>, eyre::Report> {
        self.last_update_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))
    }
}

impl Default for TaskUpdateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskUpdateWorld {
    TaskUpdateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
