//! Taskboard: an in-memory task tracking HTTP API.
//!
//! Clients create, list, read, update, and delete tasks over JSON. The
//! crate keeps the business rules (field validation, the high-priority
//! seven-day window, and the completed-task lock) in a pure core and wraps
//! it in a thin axum dispatcher.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and validation
//! - **Adapters**: Concrete implementations of ports (process memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, validation, storage, and lifecycle service
//! - [`api`]: HTTP routes, handlers, and response envelope
//! - [`config`]: Environment-driven process configuration

pub mod api;
pub mod config;
pub mod task;
