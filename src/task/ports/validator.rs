//! Validator port for task payloads.
//!
//! Defines the abstract interface the request dispatcher uses to turn a
//! parsed JSON body into a validated domain payload.

use crate::task::{
    domain::{NewTask, TaskPatch},
    validation::ValidationError,
};
use serde_json::Value;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for task payload validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all validation errors before returning (not fail-fast)
/// - Use `ValidationError::multiple` to combine errors
/// - Be stateless and thread-safe
pub trait TaskValidator: Send + Sync {
    /// Validates a complete creation payload.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every violated rule, in field
    /// declaration order followed by cross-field rules.
    fn validate_create(&self, payload: &Value) -> ValidationResult<NewTask>;

    /// Validates a partial update payload on its own.
    ///
    /// Cross-field rules only fire when the payload itself carries every
    /// field they need; checks against the stored task happen in the
    /// lifecycle service.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every violated rule, or a single
    /// `NoFieldsToUpdate` error for an empty payload.
    fn validate_update(&self, payload: &Value) -> ValidationResult<TaskPatch>;
}
