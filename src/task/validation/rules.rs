//! Individual validation rule implementations.
//!
//! Each rule is a pure function that validates one field of a task payload.
//! Rules receive the raw JSON value (or `None` when the key is absent) and
//! return the parsed value on success or a specific `ValidationError` on
//! failure. A JSON `null` counts as missing for required fields and as a
//! wrongly typed value for optional ones.

use super::{TaskField, ValidationError};
use crate::task::domain::{TaskPriority, TaskStatus};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

/// Whether a rule treats an absent field as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The field must be present (creation).
    Required,
    /// The field may be omitted (update).
    Optional,
}

impl Requirement {
    fn absent<T>(self, field: TaskField) -> Result<Option<T>, ValidationError> {
        match self {
            Self::Required => Err(ValidationError::Required(field)),
            Self::Optional => Ok(None),
        }
    }

    const fn empty(self, field: TaskField) -> ValidationError {
        match self {
            Self::Required => ValidationError::Required(field),
            Self::Optional => ValidationError::Empty(field),
        }
    }

    /// A present `null` is missing when required and mistyped otherwise.
    fn null(self, field: TaskField, mistyped: ValidationError) -> ValidationError {
        match self {
            Self::Required => ValidationError::Required(field),
            Self::Optional => mistyped,
        }
    }
}

/// Returns the raw value for `field`, `null` included.
#[must_use]
pub fn lookup(fields: &Map<String, Value>, field: TaskField) -> Option<&Value> {
    fields.get(field.key())
}

/// Validates the task name: a string that is not blank and holds at most
/// `max_length` characters.
///
/// # Errors
///
/// Returns `Required`, `Empty`, `NotAString`, or `NameTooLong`.
pub fn validate_name(
    value: Option<&Value>,
    max_length: usize,
    requirement: Requirement,
) -> Result<Option<String>, ValidationError> {
    let Some(name) = validate_text(TaskField::Name, value, requirement)? else {
        return Ok(None);
    };
    if name.chars().count() > max_length {
        return Err(ValidationError::NameTooLong { max: max_length });
    }
    Ok(Some(name))
}

/// Validates the task details: a string that is not blank, of any length.
///
/// # Errors
///
/// Returns `Required`, `Empty`, or `NotAString`.
pub fn validate_details(
    value: Option<&Value>,
    requirement: Requirement,
) -> Result<Option<String>, ValidationError> {
    validate_text(TaskField::Details, value, requirement)
}

/// Blank means whitespace-only; the accepted text is kept verbatim.
fn validate_text(
    field: TaskField,
    value: Option<&Value>,
    requirement: Requirement,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => requirement.absent(field),
        Some(Value::Null) => Err(requirement.null(field, ValidationError::NotAString(field))),
        Some(Value::String(raw)) if raw.trim().is_empty() => Err(requirement.empty(field)),
        Some(Value::String(raw)) => Ok(Some(raw.clone())),
        Some(_) => Err(ValidationError::NotAString(field)),
    }
}

/// Validates the task status against the status enumeration.
///
/// # Errors
///
/// Returns `Required`, `Empty`, or `InvalidStatus`.
pub fn validate_status(
    value: Option<&Value>,
    requirement: Requirement,
) -> Result<Option<TaskStatus>, ValidationError> {
    match value {
        None => requirement.absent(TaskField::Status),
        Some(Value::Null) => Err(requirement.null(
            TaskField::Status,
            ValidationError::InvalidStatus,
        )),
        Some(Value::String(raw)) if raw.trim().is_empty() => {
            Err(requirement.empty(TaskField::Status))
        }
        Some(Value::String(raw)) => TaskStatus::try_from(raw.as_str())
            .map(Some)
            .map_err(|_| ValidationError::InvalidStatus),
        Some(_) => Err(ValidationError::InvalidStatus),
    }
}

/// Validates the task priority against the priority enumeration.
///
/// # Errors
///
/// Returns `Required`, `Empty`, or `InvalidPriority`.
pub fn validate_priority(
    value: Option<&Value>,
    requirement: Requirement,
) -> Result<Option<TaskPriority>, ValidationError> {
    match value {
        None => requirement.absent(TaskField::Priority),
        Some(Value::Null) => Err(requirement.null(
            TaskField::Priority,
            ValidationError::InvalidPriority,
        )),
        Some(Value::String(raw)) if raw.trim().is_empty() => {
            Err(requirement.empty(TaskField::Priority))
        }
        Some(Value::String(raw)) => TaskPriority::try_from(raw.as_str())
            .map(Some)
            .map_err(|_| ValidationError::InvalidPriority),
        Some(_) => Err(ValidationError::InvalidPriority),
    }
}

/// Validates a date field (`startDate` or `dueDate`).
///
/// # Errors
///
/// Returns `Required`, `Empty`, or `InvalidDate`.
pub fn validate_date(
    field: TaskField,
    value: Option<&Value>,
    requirement: Requirement,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    match value {
        None => requirement.absent(field),
        Some(Value::Null) => Err(requirement.null(field, ValidationError::InvalidDate(field))),
        Some(Value::String(raw)) if raw.trim().is_empty() => Err(requirement.empty(field)),
        Some(Value::String(raw)) => parse_date(raw)
            .map(Some)
            .ok_or(ValidationError::InvalidDate(field)),
        Some(_) => Err(ValidationError::InvalidDate(field)),
    }
}

/// Rejects every key that is not a client-settable task field.
///
/// Keys are reported in the order the object yields them.
#[must_use]
pub fn validate_known_fields(fields: &Map<String, Value>) -> Vec<ValidationError> {
    fields
        .keys()
        .filter(|key| TaskField::from_key(key).is_none())
        .map(|key| ValidationError::UnknownField(key.clone()))
        .collect()
}

/// Parses a wire date.
///
/// Accepts RFC 3339 timestamps, zone-less ISO 8601 date-times (read as
/// UTC), and plain `YYYY-MM-DD` calendar dates (midnight UTC).
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
