//! When steps for task ownership BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;
use taskwise::task::services::{CreateTaskRequest, UpdateTaskRequest};

#[when(r#"owner "{owner}" lists their tasks"#)]
fn owner_lists_tasks(world: &mut TaskWorld, owner: String) {
    let owner_id = world.owner(&owner);
    let result = run_async(world.service.list(owner_id));
    world.last_listing = world.record(result);
}

#[when(r#"owner "{owner}" marks that task as completed"#)]
fn owner_completes_last_task(world: &mut TaskWorld, owner: String) -> Result<(), eyre::Report> {
    let owner_id = world.owner(&owner);
    let task_id = world.last_task()?.id();
    let result = run_async(world.service.update(
        owner_id,
        task_id,
        UpdateTaskRequest::new().with_completed(true),
    ));
    world.record(result);
    Ok(())
}

#[when(r#"owner "{owner}" deletes that task"#)]
fn owner_deletes_last_task(world: &mut TaskWorld, owner: String) -> Result<(), eyre::Report> {
    let owner_id = world.owner(&owner);
    let task_id = world.last_task()?.id();
    let result = run_async(world.service.delete(owner_id, task_id));
    world.record(result);
    Ok(())
}

#[when(r#"owner "{owner}" creates a batch of {titles}"#)]
fn owner_creates_batch(world: &mut TaskWorld, owner: String, titles: String) {
    let owner_id = world.owner(&owner);
    let requests = titles
        .split(',')
        .map(|title| CreateTaskRequest::new(title.trim().trim_matches('"'), "Rust"))
        .collect();
    let result = run_async(world.service.create_many(owner_id, requests));
    world.record(result);
}

#[when(r#"owner "{owner}" groups their tasks by category"#)]
fn owner_groups_tasks(world: &mut TaskWorld, owner: String) {
    let owner_id = world.owner(&owner);
    let result = run_async(world.service.by_category(owner_id));
    world.last_groups = world.record(result);
}

#[when(r#"owner "{owner}" requests statistics"#)]
fn owner_requests_stats(world: &mut TaskWorld, owner: String) {
    let owner_id = world.owner(&owner);
    let result = run_async(world.service.stats(owner_id));
    world.last_stats = world.record(result);
}
