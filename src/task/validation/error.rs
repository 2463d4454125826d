//! Validation error type for task payloads.
//!
//! Every variant renders as the human-readable message reported to
//! clients; `Multiple` joins its members with `, `.

use super::TaskField;
use crate::task::domain::TaskDomainError;
use thiserror::Error;

/// Errors that can occur while validating a task payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The request body is not a JSON object.
    #[error("Request body must be a JSON object")]
    NotAnObject,

    /// A required field is absent, null, or empty.
    #[error("{} {} required", .0.label(), .0.verb())]
    Required(TaskField),

    /// An optional field was supplied but is empty.
    #[error("{} cannot be empty", .0.label())]
    Empty(TaskField),

    /// A text field holds a non-string JSON value.
    #[error("{} must be a string", .0.label())]
    NotAString(TaskField),

    /// The name exceeds the configured maximum length.
    #[error("Task name must not exceed {max} characters")]
    NameTooLong {
        /// Maximum allowed length in characters.
        max: usize,
    },

    /// The status is not a member of the status enumeration.
    #[error("Status must be one of: To Do, In Progress, Completed")]
    InvalidStatus,

    /// The priority is not a member of the priority enumeration.
    #[error("Priority must be one of: Low, Medium, High")]
    InvalidPriority,

    /// A date field does not parse as a date.
    #[error("{} must be a valid date", .0.label())]
    InvalidDate(TaskField),

    /// A cross-field business rule failed within the payload.
    #[error(transparent)]
    BusinessRule(#[from] TaskDomainError),

    /// The body carries a key that is not a client-settable field.
    #[error("\"{0}\" is not allowed")]
    UnknownField(String),

    /// An update payload carries no fields at all.
    #[error("At least one field must be provided for update")]
    NoFieldsToUpdate,

    /// Multiple validation errors occurred.
    #[error("{}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Combines multiple validation errors into a single error.
    ///
    /// Nested `Multiple` values are flattened. If exactly one error remains,
    /// it is returned directly rather than wrapped.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        let mut flattened = Vec::with_capacity(errors.len());
        for error in errors {
            match error {
                Self::Multiple(inner) => flattened.extend(inner),
                other => flattened.push(other),
            }
        }
        if flattened.len() == 1
            && let Some(single) = flattened.pop()
        {
            return single;
        }
        Self::Multiple(flattened)
    }

    /// Returns the individual messages, in reporting order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Multiple(errors) => errors.iter().flat_map(Self::messages).collect(),
            other => vec![other.to_string()],
        }
    }
}
