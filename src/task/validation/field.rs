//! Client-settable task fields and their human-readable labels.

use std::fmt;

/// A task field that clients may supply in a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// `name`
    Name,
    /// `details`
    Details,
    /// `status`
    Status,
    /// `priority`
    Priority,
    /// `startDate`
    StartDate,
    /// `dueDate`
    DueDate,
}

impl TaskField {
    /// Every field, in declaration order. Validation errors are reported in
    /// this order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Details,
        Self::Status,
        Self::Priority,
        Self::StartDate,
        Self::DueDate,
    ];

    /// Returns the JSON key for the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Details => "details",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::StartDate => "startDate",
            Self::DueDate => "dueDate",
        }
    }

    /// Returns the field's label as used at the start of error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Task name",
            Self::Details => "Task details",
            Self::Status => "Task status",
            Self::Priority => "Task priority",
            Self::StartDate => "Start date",
            Self::DueDate => "Due date",
        }
    }

    /// Looks a field up by its JSON key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    const fn is_plural(self) -> bool {
        matches!(self, Self::Details)
    }

    /// Returns `"is"` or `"are"` to agree with the label.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        if self.is_plural() { "are" } else { "is" }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
