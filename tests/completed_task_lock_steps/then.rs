//! Then steps for update-time business rule scenarios.

use super::world::{TaskUpdateWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{domain::TaskDomainError, services::TaskLifecycleError};

#[then("the update is rejected because the task is completed")]
fn rejected_as_completed(world: &TaskUpdateWorld) -> Result<(), eyre::Report> {
    let result = world.last_update_result()?;
    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::CompletedTaskLocked(_)
        ))
    ) {
        return Err(eyre::eyre!("expected completed-task lock error, got {result:?}"));
    }
    Ok(())
}

#[then("the update is rejected because the high-priority window is exceeded")]
fn rejected_by_window(world: &TaskUpdateWorld) -> Result<(), eyre::Report> {
    let result = world.last_update_result()?;
    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::HighPriorityWindowExceeded
        ))
    ) {
        return Err(eyre::eyre!("expected high-priority window error, got {result:?}"));
    }
    Ok(())
}

#[then("the stored task is unchanged")]
fn stored_task_unchanged(world: &TaskUpdateWorld) -> Result<(), eyre::Report> {
    let stored = world.stored_task()?;
    let current = run_async(world.service.get(stored.id()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    eyre::ensure!(&current == stored, "stored task changed after a rejected update");
    Ok(())
}

#[then(r#"the update succeeds with status "{status}""#)]
fn succeeds_with_status(world: &TaskUpdateWorld, status: String) -> Result<(), eyre::Report> {
    let task = world
        .last_update_result()?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected update failure: {err}"))?;
    eyre::ensure!(
        task.status().as_str() == status,
        "expected status {status}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the update succeeds with priority "{priority}""#)]
fn succeeds_with_priority(world: &TaskUpdateWorld, priority: String) -> Result<(), eyre::Report> {
    let task = world
        .last_update_result()?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected update failure: {err}"))?;
    eyre::ensure!(
        task.priority().as_str() == priority,
        "expected priority {priority}, found {}",
        task.priority()
    );
    Ok(())
}

#[then("the update timestamp is later than the creation timestamp")]
fn updated_after_created(world: &TaskUpdateWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_update_result()?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected update failure: {err}"))?;
    eyre::ensure!(
        task.updated_at() > task.created_at(),
        "updated_at {} is not after created_at {}",
        task.updated_at(),
        task.created_at()
    );
    Ok(())
}
