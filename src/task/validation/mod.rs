//! Task payload validation.
//!
//! This module provides the default implementation of task payload
//! validation: individual field rules and the composite create/update
//! validators built from them.

pub mod error;
pub mod field;
pub mod rules;
pub mod service;

pub use error::ValidationError;
pub use field::TaskField;
pub use service::{
    DEFAULT_MAX_NAME_LENGTH, DefaultTaskValidator, ValidationConfig, validate_create,
    validate_update,
};
