//! In-memory integration tests for owner-scoped task management.

use super::helpers::{Harness, harness, owner, rust_task};
use rstest::rstest;
use taskwise::task::{
    domain::{OwnerId, TaskPriority, UNCATEGORIZED_LABEL},
    services::{TaskServiceError, UpdateTaskRequest},
};

fn group_size(json: &serde_json::Value, label: &str) -> Option<usize> {
    json.get(label)
        .and_then(serde_json::Value::as_array)
        .map(Vec::len)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_round_trips_through_the_store(
    harness: Harness,
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let created = harness
        .service
        .create(
            owner,
            rust_task("Read the async book")
                .with_description("Chapters one to four")
                .with_priority("low")
                .with_due_date("2024-12-31"),
        )
        .await?;

    let fetched = harness.service.get_by_id(owner, created.id()).await?;

    eyre::ensure!(fetched == created, "fetched task differs from created task");
    eyre::ensure!(fetched.priority() == TaskPriority::Low, "priority not kept");
    eyre::ensure!(fetched.due_date().is_some(), "due date not kept");
    eyre::ensure!(harness.repository.len()? == 1, "expected one stored task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owners_never_see_each_others_tasks(harness: Harness) -> Result<(), eyre::Report> {
    let alice = OwnerId::random();
    let bob = OwnerId::random();
    harness
        .service
        .create_many(alice, vec![rust_task("a1"), rust_task("a2")])
        .await?;
    let bobs = harness.service.create(bob, rust_task("b1")).await?;

    let alice_tasks = harness.service.list(alice).await?;
    let bob_tasks = harness.service.list(bob).await?;

    eyre::ensure!(alice_tasks.len() == 2, "alice should see two tasks");
    eyre::ensure!(
        alice_tasks.iter().all(|task| task.owner_id() == alice),
        "alice sees a foreign task"
    );
    eyre::ensure!(bob_tasks == vec![bobs.clone()], "bob should see only their task");

    let stolen = harness.service.get_by_id(alice, bobs.id()).await;
    eyre::ensure!(
        matches!(stolen, Err(TaskServiceError::NotFound(_))),
        "cross-owner read must be not-found, got {stolen:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_newest_first(harness: Harness, owner: OwnerId) -> Result<(), eyre::Report> {
    for title in ["oldest", "middle", "newest"] {
        harness.service.create(owner, rust_task(title)).await?;
    }

    let titles: Vec<String> = harness
        .service
        .list(owner)
        .await?
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();

    eyre::ensure!(
        titles == ["newest", "middle", "oldest"],
        "unexpected order: {titles:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_tasks_moves_the_completion_rate(
    harness: Harness,
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let created = harness
        .service
        .create_many(
            owner,
            (0..8).map(|index| rust_task(&format!("step {index}"))).collect(),
        )
        .await?;
    let first = created
        .first()
        .ok_or_else(|| eyre::eyre!("batch returned no tasks"))?;
    harness
        .service
        .update(owner, first.id(), UpdateTaskRequest::new().with_completed(true))
        .await?;

    let stats = harness.service.stats(owner).await?;

    eyre::ensure!(stats.total == 8, "expected eight tasks");
    eyre::ensure!(stats.completed == 1, "expected one completed task");
    eyre::ensure!(stats.pending == 7, "expected seven pending tasks");
    eyre::ensure!(stats.completion_rate == 13, "expected 13 percent");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn grouping_uses_first_encounter_order(
    harness: Harness,
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    harness
        .service
        .create_many(
            owner,
            vec![
                rust_task("a").with_category("Programming"),
                rust_task("b"),
                rust_task("c").with_category("Programming"),
            ],
        )
        .await?;

    let groups = harness.service.by_category(owner).await?;
    let labels: Vec<&str> = groups.labels().collect();
    let json = serde_json::to_value(&groups)?;

    eyre::ensure!(labels.len() == 2, "expected two groups, got {labels:?}");
    eyre::ensure!(
        labels.contains(&"Programming") && labels.contains(&UNCATEGORIZED_LABEL),
        "unexpected labels {labels:?}"
    );
    eyre::ensure!(
        group_size(&json, "Programming") == Some(2),
        "expected two programming tasks in {json}"
    );
    eyre::ensure!(
        group_size(&json, UNCATEGORIZED_LABEL) == Some(1),
        "expected one uncategorized task in {json}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_batch_leaves_store_untouched(
    harness: Harness,
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let result = harness
        .service
        .create_many(
            owner,
            vec![rust_task("fine"), rust_task("fine too").with_priority("someday")],
        )
        .await;

    eyre::ensure!(
        matches!(result, Err(TaskServiceError::InvalidBatchEntry { index: 1, .. })),
        "expected second entry to be rejected, got {result:?}"
    );
    eyre::ensure!(harness.repository.is_empty()?, "store should stay empty");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_disappears_from_every_view(
    harness: Harness,
    owner: OwnerId,
) -> Result<(), eyre::Report> {
    let task = harness
        .service
        .create(owner, rust_task("temporary").with_category("Scratch"))
        .await?;

    harness.service.delete(owner, task.id()).await?;

    eyre::ensure!(harness.service.list(owner).await?.is_empty(), "list not empty");
    eyre::ensure!(
        harness.service.by_category(owner).await?.is_empty(),
        "groups not empty"
    );
    eyre::ensure!(harness.service.stats(owner).await?.total == 0, "stats not zero");
    Ok(())
}
