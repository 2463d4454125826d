//! HTTP dispatcher for the task service.
//!
//! Translates requests into validator and lifecycle-service calls and
//! their outcomes into the `{status, message, data?}` envelope. All
//! business decisions live in [`crate::task`]; this layer only maps them
//! onto status codes.

pub mod dto;
pub mod handlers;
pub mod request_log;
pub mod response;
pub mod routes;

pub use request_log::{RequestLog, RequestLogLayer, TracingRequestLog};
pub use response::{ApiErrorResponse, ApiResponse};
pub use routes::{router, router_with_request_log};

use crate::task::{
    ports::{TaskRepository, TaskValidator},
    services::TaskLifecycleService,
};
use mockable::Clock;
use std::sync::Arc;

/// Shared handler state.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Lifecycle service owning the task store.
    pub service: Arc<TaskLifecycleService<R, C>>,
    /// Payload validator.
    pub validator: Arc<dyn TaskValidator>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates handler state from a service and a validator.
    #[must_use]
    pub fn new(service: TaskLifecycleService<R, C>, validator: Arc<dyn TaskValidator>) -> Self {
        Self {
            service: Arc::new(service),
            validator,
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            validator: Arc::clone(&self.validator),
        }
    }
}
