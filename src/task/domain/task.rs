//! Task aggregate root and the validated payloads that create and change it.

use super::{Schedule, TaskDomainError, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

/// Validated payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Trimmed, length-checked task name.
    pub name: String,
    /// Trimmed, non-empty task details.
    pub details: String,
    /// Initial status, as supplied by the client.
    pub status: TaskStatus,
    /// Task priority.
    pub priority: TaskPriority,
    /// Start and due date window.
    pub schedule: Schedule,
}

/// Validated partial payload for updating a task.
///
/// Each field is `Some` only when the client supplied it. The payload has
/// been checked field by field, but not against the stored task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement details.
    pub details: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
    /// Replacement start date.
    pub start_date: Option<DateTime<Utc>>,
    /// Replacement due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Creates a patch that only changes the status.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && !self.touches_non_status_fields()
    }

    /// Returns `true` when the status is the only field set.
    #[must_use]
    pub const fn is_status_only(&self) -> bool {
        self.status.is_some() && !self.touches_non_status_fields()
    }

    const fn touches_non_status_fields(&self) -> bool {
        self.name.is_some()
            || self.details.is_some()
            || self.priority.is_some()
            || self.start_date.is_some()
            || self.due_date.is_some()
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    name: String,
    details: String,
    status: TaskStatus,
    priority: TaskPriority,
    schedule: Schedule,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh identifier.
    ///
    /// `created_at` and `updated_at` are both set to the current clock time.
    #[must_use]
    pub fn new(new_task: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            name: new_task.name,
            details: new_task.details,
            status: new_task.status,
            priority: new_task.priority,
            schedule: new_task.schedule,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task details.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the date window.
    #[must_use]
    pub const fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a validated partial update.
    ///
    /// The patch is merged onto the current values and the merged result is
    /// checked before anything is written: a completed task only accepts a
    /// status-only patch, the effective due date must follow the effective
    /// start date, and a high effective priority must fit the high-priority
    /// window. On error the task is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CompletedTaskLocked`],
    /// [`TaskDomainError::DueDateNotAfterStart`], or
    /// [`TaskDomainError::HighPriorityWindowExceeded`].
    pub fn apply_patch(
        &mut self,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if self.status.is_completed() && !patch.is_status_only() {
            return Err(TaskDomainError::CompletedTaskLocked(self.id));
        }

        let priority = patch.priority.unwrap_or(self.priority);
        let schedule = Schedule::new(
            patch.start_date.unwrap_or(self.schedule.start_date()),
            patch.due_date.unwrap_or(self.schedule.due_date()),
        )?;
        schedule.check_priority(priority)?;

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(details) = patch.details {
            self.details = details;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.priority = priority;
        self.schedule = schedule;
        self.touch(clock);
        Ok(())
    }

    /// Advances `updated_at` to the current clock time.
    ///
    /// `updated_at` must strictly increase on every mutation, so a clock
    /// that has not moved since the last write is nudged forward by one
    /// microsecond.
    fn touch(&mut self, clock: &impl Clock) {
        let now = clock.utc();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::microseconds(1)
        };
    }
}
