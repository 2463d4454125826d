//! Task tracking: validated creation, lookup, update, and deletion of tasks.
//!
//! Clients create tasks with a name, details, status, priority, and a
//! start/due date window. Two rules carry the business weight: a
//! high-priority task must be due within seven days of its start, and a
//! completed task only accepts further status changes. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Payload validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
