//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services
//! and the inbound request dispatcher.

pub mod repository;
pub mod validator;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{TaskValidator, ValidationResult};
