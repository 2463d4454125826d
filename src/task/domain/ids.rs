//! Identifier type for the task domain.

use super::ParseTaskIdError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    /// Parses a hyphenated UUID, as carried in `/tasks/{id}` paths.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(value.trim())
            .map(Self)
            .map_err(|_| ParseTaskIdError(value.to_owned()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
