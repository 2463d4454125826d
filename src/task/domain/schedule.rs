//! Start/due date window for a task.

use super::{TaskDomainError, TaskPriority};
use chrono::{DateTime, TimeDelta, Utc};

/// Longest span, in days, allowed between start and due date of a
/// high-priority task.
pub const HIGH_PRIORITY_WINDOW_DAYS: i64 = 7;

/// Validated date window with `due_date` strictly after `start_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Schedule {
    start_date: DateTime<Utc>,
    due_date: DateTime<Utc>,
}

impl Schedule {
    /// Creates a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateNotAfterStart`] when `due_date` is
    /// not strictly later than `start_date`.
    pub fn new(
        start_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> Result<Self, TaskDomainError> {
        if due_date <= start_date {
            return Err(TaskDomainError::DueDateNotAfterStart);
        }
        Ok(Self {
            start_date,
            due_date,
        })
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(self) -> DateTime<Utc> {
        self.start_date
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the time between start and due date.
    #[must_use]
    pub fn span(self) -> TimeDelta {
        self.due_date - self.start_date
    }

    /// Checks the schedule against the window rule for `priority`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::HighPriorityWindowExceeded`] when the
    /// priority is high and the span is longer than
    /// [`HIGH_PRIORITY_WINDOW_DAYS`].
    pub fn check_priority(self, priority: TaskPriority) -> Result<(), TaskDomainError> {
        if priority == TaskPriority::High && self.span() > TimeDelta::days(HIGH_PRIORITY_WINDOW_DAYS)
        {
            return Err(TaskDomainError::HighPriorityWindowExceeded);
        }
        Ok(())
    }
}
