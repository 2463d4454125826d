//! In-memory integration tests for validated task lifecycle operations.

use super::helpers::{TestService, new_task, service, task_payload, validator};
use rstest::rstest;
use serde_json::json;
use taskboard::task::{
    domain::{TaskDomainError, TaskStatus},
    ports::TaskValidator,
    services::TaskLifecycleError,
    validation::DefaultTaskValidator,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_starts_with_matching_timestamps(service: TestService) -> eyre::Result<()> {
    let created = service.create(new_task("Plan sprint")?).await?;

    eyre::ensure!(
        created.created_at() == created.updated_at(),
        "timestamps differ at creation"
    );
    eyre::ensure!(created.name() == "Plan sprint", "name not stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_includes_created_tasks(service: TestService) -> eyre::Result<()> {
    let first = service.create(new_task("one")?).await?;
    let second = service.create(new_task("two")?).await?;

    let listed = service.list().await?;

    eyre::ensure!(listed.len() == 2, "expected two tasks, found {}", listed.len());
    eyre::ensure!(
        listed.contains(&first) && listed.contains(&second),
        "created tasks missing from list"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn validated_update_flows_through_service(
    service: TestService,
    validator: DefaultTaskValidator,
) -> eyre::Result<()> {
    let created = service.create(new_task("Plan sprint")?).await?;
    let patch = validator.validate_update(&json!({
        "name": "Plan sprint 42",
        "status": "In Progress"
    }))?;

    let updated = service.update(created.id(), patch).await?;

    eyre::ensure!(updated.name() == "Plan sprint 42", "name not applied");
    eyre::ensure!(updated.status() == TaskStatus::InProgress, "status not applied");
    eyre::ensure!(updated.details() == created.details(), "details changed");
    eyre::ensure!(updated.updated_at() > created.updated_at(), "updatedAt did not advance");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn single_date_update_is_checked_against_stored_start(
    service: TestService,
    validator: DefaultTaskValidator,
) -> eyre::Result<()> {
    let created = service.create(new_task("Plan sprint")?).await?;
    let patch = validator.validate_update(&json!({"dueDate": "2024-05-01"}))?;

    let result = service.update(created.id(), patch).await;

    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Domain(TaskDomainError::DueDateNotAfterStart))
        ),
        "expected due-after-start violation, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_only_accepts_status_changes(
    service: TestService,
    validator: DefaultTaskValidator,
) -> eyre::Result<()> {
    let mut payload = task_payload("Close quarter");
    payload["status"] = json!("Completed");
    let created = service.create(validator.validate_create(&payload)?).await?;

    let rename = validator.validate_update(&json!({"name": "Reopen quarter"}))?;
    let rejected = service.update(created.id(), rename).await;
    eyre::ensure!(
        matches!(
            rejected,
            Err(TaskLifecycleError::Domain(TaskDomainError::CompletedTaskLocked(_)))
        ),
        "expected completed lock, got {rejected:?}"
    );

    let reopen = validator.validate_update(&json!({"status": "To Do"}))?;
    let reopened = service.update(created.id(), reopen).await?;
    eyre::ensure!(reopened.status() == TaskStatus::ToDo, "status not reopened");

    let rename_again = validator.validate_update(&json!({"name": "Reopen quarter"}))?;
    let renamed = service.update(created.id(), rename_again).await?;
    eyre::ensure!(renamed.name() == "Reopen quarter", "reopened task not editable");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_gone(service: TestService) -> eyre::Result<()> {
    let created = service.create(new_task("Temporary")?).await?;

    eyre::ensure!(service.delete(created.id()).await?, "delete reported no task");
    let lookup = service.get(created.id()).await;
    eyre::ensure!(
        matches!(lookup, Err(TaskLifecycleError::NotFound(_))),
        "expected not found after delete, got {lookup:?}"
    );
    eyre::ensure!(!service.delete(created.id()).await?, "second delete removed something");
    Ok(())
}
