//! Then steps for task ownership BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::then;
use taskwise::task::{domain::Task, services::TaskServiceError};

#[then(r#"the listing contains only "{title}""#)]
fn listing_contains_only(world: &TaskWorld, title: String) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing in scenario world"))?;
    let titles: Vec<&str> = listing.iter().map(|task| task.title().as_str()).collect();
    if titles != [title.as_str()] {
        return Err(eyre::eyre!("expected only {title}, found {titles:?}"));
    }
    Ok(())
}

#[then("the operation fails as not found")]
fn operation_not_found(world: &TaskWorld) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the operation to fail"))?;
    if !error.is_not_found() {
        return Err(eyre::eyre!("expected not-found error, got {error:?}"));
    }
    Ok(())
}

#[then(r#"the task is still incomplete for owner "{owner}""#)]
fn task_still_incomplete(world: &mut TaskWorld, owner: String) -> Result<(), eyre::Report> {
    let owner_id = world.owner(&owner);
    let task_id = world.last_task()?.id();
    let task = run_async(world.service.get_by_id(owner_id, task_id))
        .map_err(|err| eyre::eyre!("owner lookup failed: {err}"))?;
    if task.is_completed() {
        return Err(eyre::eyre!("foreign update changed the task"));
    }
    Ok(())
}

#[then(r#"owner "{owner}" still has {count:u64} tasks"#)]
fn owner_task_count(world: &mut TaskWorld, owner: String, count: u64) -> Result<(), eyre::Report> {
    let owner_id = world.owner(&owner);
    let tasks = run_async(world.service.list(owner_id))
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    if u64::try_from(tasks.len())? != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then("the batch is rejected at entry {index:u64}")]
fn batch_rejected_at(world: &TaskWorld, index: u64) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the batch to fail"))?;
    let TaskServiceError::InvalidBatchEntry { index: rejected, .. } = error else {
        return Err(eyre::eyre!("expected invalid batch entry, got {error:?}"));
    };
    if u64::try_from(*rejected)? != index {
        return Err(eyre::eyre!("expected entry {index}, got {rejected}"));
    }
    Ok(())
}

#[then(r#"there are {count:u64} tasks under "{label}""#)]
fn tasks_under_label(world: &TaskWorld, count: u64, label: String) -> Result<(), eyre::Report> {
    let groups = world
        .last_groups
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing category groups in scenario world"))?;
    let found = groups.get(&label).map_or(0, <[Task]>::len);
    if u64::try_from(found)? != count {
        return Err(eyre::eyre!("expected {count} under {label}, found {found}"));
    }
    Ok(())
}

#[then("the completion rate is {rate:u64} percent")]
fn completion_rate_is(world: &TaskWorld, rate: u64) -> Result<(), eyre::Report> {
    let stats = world
        .last_stats
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing statistics in scenario world"))?;
    if u64::from(stats.completion_rate) != rate {
        return Err(eyre::eyre!(
            "expected {rate} percent, found {}",
            stats.completion_rate
        ));
    }
    Ok(())
}

#[then("the statistics count {count:u64} tasks")]
fn statistics_count(world: &TaskWorld, count: u64) -> Result<(), eyre::Report> {
    let stats = world
        .last_stats
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing statistics in scenario world"))?;
    if u64::try_from(stats.total)? != count || stats.pending != 0 {
        return Err(eyre::eyre!("unexpected statistics {stats:?}"));
    }
    Ok(())
}
