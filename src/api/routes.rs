//! Router assembly.

use super::{
    AppState, handlers,
    request_log::{RequestLog, RequestLogLayer, TracingRequestLog},
};
use crate::task::ports::TaskRepository;
use axum::{Router, routing::get};
use mockable::Clock;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the task API router with request logging through `tracing`.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    router_with_request_log(state, Arc::new(TracingRequestLog))
}

/// Builds the task API router, reporting request timings to `request_log`.
///
/// Routes:
///
/// - `POST /tasks`, `GET /tasks`
/// - `GET`, `PUT`, `PATCH`, `DELETE /tasks/{id}`
/// - `GET /health`
///
/// Anything else answers 404 `Route not found`.
pub fn router_with_request_log<R, C>(
    state: AppState<R, C>,
    request_log: Arc<dyn RequestLog>,
) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            "/tasks/{id}",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .patch(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(RequestLogLayer::new(request_log))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
