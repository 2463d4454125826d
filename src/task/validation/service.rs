//! Composite task payload validators.
//!
//! `validate_create` checks a complete candidate task; `validate_update`
//! checks a partial payload in isolation. The two have different inputs on
//! purpose: the authoritative merged check for updates (stored task plus
//! patch) lives in [`crate::task::domain::Task::apply_patch`].

use super::{
    TaskField, ValidationError,
    rules::{self, Requirement},
};
use crate::task::{
    domain::{NewTask, Schedule, TaskPatch, TaskPriority},
    ports::{TaskValidator, ValidationResult},
};
use serde_json::{Map, Value};

/// Default maximum task name length, in characters.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 200;

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use taskboard::task::validation::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_name_length, 200);
///
/// let compact = ValidationConfig::default().with_max_name_length(50);
/// assert_eq!(compact.max_name_length, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum task name length in characters.
    pub max_name_length: usize,
}

impl ValidationConfig {
    /// Returns a copy with a different name length bound.
    #[must_use]
    pub const fn with_max_name_length(mut self, max_name_length: usize) -> Self {
        self.max_name_length = max_name_length;
        self
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

/// Validates a creation payload.
///
/// Every rule runs; violations are reported together in field declaration
/// order (`name`, `details`, `status`, `priority`, `startDate`, `dueDate`),
/// then the high-priority window rule, then unknown keys.
///
/// # Errors
///
/// Returns a `ValidationError` (possibly `Multiple`) describing every
/// violation.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use taskboard::task::validation::{ValidationConfig, validate_create};
///
/// let result = validate_create(
///     &json!({
///         "name": "Ship it",
///         "details": "Cut the release",
///         "status": "To Do",
///         "priority": "High",
///         "startDate": "2024-01-01",
///         "dueDate": "2024-01-07"
///     }),
///     &ValidationConfig::default(),
/// );
/// assert!(result.is_ok());
/// ```
pub fn validate_create(payload: &Value, config: &ValidationConfig) -> ValidationResult<NewTask> {
    let fields = as_object(payload)?;
    let mut errors = Vec::new();
    let required = Requirement::Required;

    let name = collect(
        &mut errors,
        rules::validate_name(
            rules::lookup(fields, TaskField::Name),
            config.max_name_length,
            required,
        ),
    )
    .flatten();
    let details = collect(
        &mut errors,
        rules::validate_details(rules::lookup(fields, TaskField::Details), required),
    )
    .flatten();
    let status = collect(
        &mut errors,
        rules::validate_status(rules::lookup(fields, TaskField::Status), required),
    )
    .flatten();
    let priority = collect(
        &mut errors,
        rules::validate_priority(rules::lookup(fields, TaskField::Priority), required),
    )
    .flatten();
    let start_date = collect(
        &mut errors,
        rules::validate_date(
            TaskField::StartDate,
            rules::lookup(fields, TaskField::StartDate),
            required,
        ),
    )
    .flatten();
    let due_date = collect(
        &mut errors,
        rules::validate_date(
            TaskField::DueDate,
            rules::lookup(fields, TaskField::DueDate),
            required,
        ),
    )
    .flatten();

    let schedule = match (start_date, due_date) {
        (Some(start), Some(due)) => collect(&mut errors, Schedule::new(start, due)),
        _ => None,
    };
    if let (Some(priority), Some(schedule)) = (priority, schedule) {
        collect(&mut errors, schedule.check_priority(priority));
    }
    errors.extend(rules::validate_known_fields(fields));

    match (name, details, status, priority, schedule) {
        (Some(name), Some(details), Some(status), Some(priority), Some(schedule))
            if errors.is_empty() =>
        {
            Ok(NewTask {
                name,
                details,
                status,
                priority,
                schedule,
            })
        }
        _ => Err(ValidationError::multiple(errors)),
    }
}

/// Validates an update payload on its own.
///
/// All fields are optional but at least one key must be present. Present
/// fields get the same rules as creation, and a present `null` is rejected
/// as a wrongly typed value, so every key a client sends reaches the patch
/// or fails validation. The due-after-start rule and the
/// high-priority window rule only run when this payload carries both dates
/// (and, for the window, `priority: High`).
///
/// # Errors
///
/// Returns `ValidationError::NoFieldsToUpdate` for an empty payload, or a
/// `ValidationError` (possibly `Multiple`) describing every violation.
pub fn validate_update(payload: &Value, config: &ValidationConfig) -> ValidationResult<TaskPatch> {
    let fields = as_object(payload)?;
    if fields.is_empty() {
        return Err(ValidationError::NoFieldsToUpdate);
    }

    let mut errors = Vec::new();
    let optional = Requirement::Optional;

    let name = collect(
        &mut errors,
        rules::validate_name(
            rules::lookup(fields, TaskField::Name),
            config.max_name_length,
            optional,
        ),
    )
    .flatten();
    let details = collect(
        &mut errors,
        rules::validate_details(rules::lookup(fields, TaskField::Details), optional),
    )
    .flatten();
    let status = collect(
        &mut errors,
        rules::validate_status(rules::lookup(fields, TaskField::Status), optional),
    )
    .flatten();
    let priority = collect(
        &mut errors,
        rules::validate_priority(rules::lookup(fields, TaskField::Priority), optional),
    )
    .flatten();
    let start_date = collect(
        &mut errors,
        rules::validate_date(
            TaskField::StartDate,
            rules::lookup(fields, TaskField::StartDate),
            optional,
        ),
    )
    .flatten();
    let due_date = collect(
        &mut errors,
        rules::validate_date(
            TaskField::DueDate,
            rules::lookup(fields, TaskField::DueDate),
            optional,
        ),
    )
    .flatten();

    if let (Some(start), Some(due)) = (start_date, due_date)
        && let Some(schedule) = collect(&mut errors, Schedule::new(start, due))
        && priority == Some(TaskPriority::High)
    {
        collect(&mut errors, schedule.check_priority(TaskPriority::High));
    }
    errors.extend(rules::validate_known_fields(fields));

    if !errors.is_empty() {
        return Err(ValidationError::multiple(errors));
    }
    Ok(TaskPatch {
        name,
        details,
        status,
        priority,
        start_date,
        due_date,
    })
}

fn as_object(payload: &Value) -> ValidationResult<&Map<String, Value>> {
    payload.as_object().ok_or(ValidationError::NotAnObject)
}

/// Pushes the error (if any) and returns the success value.
fn collect<T, E>(errors: &mut Vec<ValidationError>, result: Result<T, E>) -> Option<T>
where
    E: Into<ValidationError>,
{
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error.into());
            None
        }
    }
}

/// Default implementation of the task validator port.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use taskboard::task::ports::TaskValidator;
/// use taskboard::task::validation::DefaultTaskValidator;
///
/// let validator = DefaultTaskValidator::new();
/// let error = validator
///     .validate_update(&json!({}))
///     .expect_err("empty update is rejected");
/// assert_eq!(error.to_string(), "At least one field must be provided for update");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTaskValidator {
    config: ValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate_create(&self, payload: &Value) -> ValidationResult<NewTask> {
        validate_create(payload, &self.config)
    }

    fn validate_update(&self, payload: &Value) -> ValidationResult<TaskPatch> {
        validate_update(payload, &self.config)
    }
}

// Note: Unit tests for the composite validators are located in
// src/task/tests/validation_tests.rs.
