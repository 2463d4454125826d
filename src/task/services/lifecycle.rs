//! Service layer for task creation, lookup, update, and deletion.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// A business rule rejected the mutation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Mutating operations run one at a time behind a single async mutex, so
/// the read-modify-write in [`Self::update`] cannot interleave with another
/// writer. Reads go straight to the repository.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    write_lock: Arc<Mutex<()>>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates and stores a task from a validated payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the repository
    /// rejects persistence.
    pub async fn create(&self, new_task: NewTask) -> TaskLifecycleResult<Task> {
        let _guard = self.write_lock.lock().await;
        let task = Task::new(new_task, &*self.clock);
        self.repository.store(&task).await?;
        tracing::debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns every stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no such task exists, or
    /// [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Applies a validated partial update to a stored task.
    ///
    /// The patch is merged onto the stored task and the merged values are
    /// checked: a completed task only accepts status-only patches, and the
    /// effective priority and dates must satisfy the schedule rules.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no such task exists,
    /// [`TaskLifecycleError::Domain`] when a business rule rejects the
    /// merged result, or [`TaskLifecycleError::Repository`] when persistence
    /// fails.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskLifecycleResult<Task> {
        let _guard = self.write_lock.lock().await;
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))?;

        task.apply_patch(patch, &*self.clock)?;
        self.repository.update(&task).await.map_err(|err| match err {
            TaskRepositoryError::NotFound(missing) => TaskLifecycleError::NotFound(missing),
            other => TaskLifecycleError::Repository(other),
        })?;
        tracing::debug!(task_id = %id, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// Returns `true` when the task existed and was removed, `false`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when removal fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<bool> {
        let _guard = self.write_lock.lock().await;
        let removed = self.repository.remove(id).await?;
        if removed {
            tracing::debug!(task_id = %id, "task deleted");
        }
        Ok(removed)
    }
}
