//! In-memory task repository.
//!
//! Tasks live in a process-local map; nothing survives a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        let slot = tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        Ok(tasks.get(&id).cloned())
    }

    /// Returns tasks oldest first; ties are broken by identifier so the
    /// listing is stable between calls.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        let mut all: Vec<Task> = tasks.values().cloned().collect();
        all.sort_by_key(|task| (task.created_at(), task.id()));
        Ok(all)
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        Ok(tasks.remove(&id).is_some())
    }
}
