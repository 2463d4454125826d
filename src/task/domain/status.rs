//! Status and priority enumerations for tasks.

use super::{ParseTaskPriorityError, ParseTaskStatusError};
use serde::Serialize;
use std::fmt;

/// Task progress status.
///
/// Any status may move to any other status. `Completed` additionally locks
/// every other field of the task; see [`super::Task::apply_patch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "To Do")]
    ToDo,
    /// Work is under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Completed];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Returns `true` for the status that locks non-status fields.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value.trim())
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TaskPriority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority; constrained to a short schedule window.
    High,
}

impl TaskPriority {
    /// All priorities in display order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value.trim())
            .ok_or_else(|| ParseTaskPriorityError(value.to_owned()))
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
