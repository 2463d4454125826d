//! Request handlers for the task API.
//!
//! Each handler parses the path and body, delegates to the validator and
//! the lifecycle service, and wraps the outcome in the response envelope.

use super::{
    AppState,
    dto::TaskResponse,
    response::{ApiErrorResponse, ApiResponse},
};
use crate::task::{domain::TaskId, ports::TaskRepository};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;
use serde_json::Value;

/// Result type shared by the task handlers.
pub type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// Parses a path identifier, rejecting anything that is not a UUID.
///
/// # Errors
///
/// Returns a 400 response with `Invalid task ID format`.
pub fn parse_task_id(raw: &str) -> HandlerResult<TaskId> {
    raw.parse()
        .map_err(|_| ApiErrorResponse::bad_request("Invalid task ID format"))
}

/// `POST /tasks`: validates the body and stores a new task.
///
/// # Errors
///
/// Returns 400 for malformed JSON or validation failures and 500 for
/// storage failures.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<(StatusCode, Json<ApiResponse<TaskResponse>>)>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let new_task = state.validator.validate_create(&body)?;
    let task = state.service.create(new_task).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data(
            "Task created successfully",
            TaskResponse::from(&task),
        )),
    ))
}

/// `GET /tasks`: returns every stored task.
///
/// # Errors
///
/// Returns 500 for storage failures.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> HandlerResult<Json<ApiResponse<Vec<TaskResponse>>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.service.list().await?;
    Ok(Json(ApiResponse::with_data(
        "Tasks retrieved successfully",
        tasks.iter().map(TaskResponse::from).collect(),
    )))
}

/// `GET /tasks/{id}`: returns one task.
///
/// # Errors
///
/// Returns 400 for a malformed identifier, 404 for an unknown one, and
/// 500 for storage failures.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<ApiResponse<TaskResponse>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    let task = state.service.get(id).await?;
    Ok(Json(ApiResponse::with_data(
        "Task retrieved successfully",
        TaskResponse::from(&task),
    )))
}

/// `PUT /tasks/{id}` and `PATCH /tasks/{id}`: applies a partial update.
///
/// The identifier is checked before the body, so a malformed identifier
/// is reported even when the body is also invalid.
///
/// # Errors
///
/// Returns 400 for a malformed identifier, malformed JSON, validation
/// failures, or business-rule violations; 404 for an unknown identifier;
/// 500 for storage failures.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<Json<ApiResponse<TaskResponse>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    let Json(body) = payload?;
    let patch = state.validator.validate_update(&body)?;
    let task = state.service.update(id, patch).await?;
    Ok(Json(ApiResponse::with_data(
        "Task updated successfully",
        TaskResponse::from(&task),
    )))
}

/// `DELETE /tasks/{id}`: removes a task.
///
/// # Errors
///
/// Returns 400 for a malformed identifier, 404 for an unknown one, and
/// 500 for storage failures.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<ApiResponse<()>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    if !state.service.delete(id).await? {
        return Err(ApiErrorResponse::not_found("Task not found"));
    }
    Ok(Json(ApiResponse::message("Task deleted successfully")))
}

/// `GET /health`: liveness probe.
pub async fn health_check() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("OK"))
}

/// Fallback for unmatched routes.
pub async fn route_not_found() -> ApiErrorResponse {
    ApiErrorResponse::not_found("Route not found")
}
