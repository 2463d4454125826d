//! Contract tests for the in-memory task repository.

use super::helpers::{repo, unsaved_task};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskPatch, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_then_find_returns_equal_task(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let task = unsaved_task("Draft roadmap")?;
    repo.store(&task).await?;

    let found = repo.find_by_id(task.id()).await?;

    eyre::ensure!(found.as_ref() == Some(&task), "stored task not returned");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_identifier(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let task = unsaved_task("Draft roadmap")?;
    repo.store(&task).await?;

    let result = repo.store(&task).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()),
        "expected duplicate error, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_stored_state(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let mut task = unsaved_task("Draft roadmap")?;
    repo.store(&task).await?;
    task.apply_patch(TaskPatch::status(TaskStatus::InProgress), &DefaultClock)?;

    repo.update(&task).await?;

    let found = repo
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    eyre::ensure!(found.status() == TaskStatus::InProgress, "status not replaced");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_task_is_not_found(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let task = unsaved_task("Never stored")?;

    let result = repo.update(&task).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()),
        "expected not found, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_unknown_returns_none(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    eyre::ensure!(
        repo.find_by_id(TaskId::new()).await?.is_none(),
        "unknown id should not resolve"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_reports_whether_a_task_existed(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let task = unsaved_task("Short lived")?;
    repo.store(&task).await?;

    eyre::ensure!(repo.remove(task.id()).await?, "first removal should succeed");
    eyre::ensure!(!repo.remove(task.id()).await?, "second removal should be a no-op");
    eyre::ensure!(repo.find_by_id(task.id()).await?.is_none(), "task still present");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_returns_every_task_oldest_first(
    repo: InMemoryTaskRepository,
) -> eyre::Result<()> {
    let mut stored = Vec::new();
    for name in ["first", "second", "third"] {
        let task = unsaved_task(name)?;
        repo.store(&task).await?;
        stored.push(task);
    }

    let all = repo.find_all().await?;

    eyre::ensure!(all.len() == 3, "expected three tasks, found {}", all.len());
    eyre::ensure!(
        all.windows(2)
            .all(|pair| matches!(pair, [a, b] if (a.created_at(), a.id()) <= (b.created_at(), b.id()))),
        "tasks are not ordered by creation"
    );
    for task in &stored {
        eyre::ensure!(all.contains(task), "missing task {}", task.id());
    }
    Ok(())
}
