//! Error types for task domain rules and parsing.

use super::TaskId;
use thiserror::Error;

/// Business-rule violations raised by the task aggregate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The due date does not fall strictly after the start date.
    #[error("Due date must be after start date")]
    DueDateNotAfterStart,

    /// A high-priority task spans more than the allowed window.
    #[error("High priority tasks must have a due date within 7 days from start date")]
    HighPriorityWindowExceeded,

    /// A completed task received a change to something other than its status.
    #[error("Completed tasks can only be updated by changing the status field")]
    CompletedTaskLocked(TaskId),
}

/// Error returned while parsing task statuses from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned when a task identifier is not a valid UUID.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
