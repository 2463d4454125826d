//! Response DTOs for the task API.

use crate::task::domain::{Task, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Task as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Task details.
    pub details: String,
    /// Canonical status spelling.
    pub status: TaskStatus,
    /// Canonical priority spelling.
    pub priority: TaskPriority,
    /// Start date, RFC 3339 UTC.
    pub start_date: String,
    /// Due date, RFC 3339 UTC.
    pub due_date: String,
    /// Creation timestamp, RFC 3339 UTC.
    pub created_at: String,
    /// Latest mutation timestamp, RFC 3339 UTC.
    pub updated_at: String,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        let schedule = task.schedule();
        Self {
            id: task.id(),
            name: task.name().to_owned(),
            details: task.details().to_owned(),
            status: task.status(),
            priority: task.priority(),
            start_date: rfc3339(schedule.start_date()),
            due_date: rfc3339(schedule.due_date()),
            created_at: rfc3339(task.created_at()),
            updated_at: rfc3339(task.updated_at()),
        }
    }
}

fn rfc3339(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
