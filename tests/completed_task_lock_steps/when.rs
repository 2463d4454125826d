//! When steps for update-time business rule scenarios.

use super::world::{TaskUpdateWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use serde_json::{Value, json};
use taskboard::task::ports::TaskValidator;

fn update_stored_task(world: &mut TaskUpdateWorld, payload: &Value) -> Result<(), eyre::Report> {
    let id = world.stored_task()?.id();
    let patch = world
        .validator
        .validate_update(payload)
        .wrap_err("validate scenario update payload")?;
    world.last_update_result = Some(run_async(world.service.update(id, patch)));
    Ok(())
}

#[when(r#"the task details are changed to "{details}""#)]
fn change_details(world: &mut TaskUpdateWorld, details: String) -> Result<(), eyre::Report> {
    update_stored_task(world, &json!({ "details": details }))
}

#[when(r#"the task status is changed to "{status}""#)]
fn change_status(world: &mut TaskUpdateWorld, status: String) -> Result<(), eyre::Report> {
    update_stored_task(world, &json!({ "status": status }))
}

#[when(r#"the task priority is changed to "{priority}""#)]
fn change_priority(world: &mut TaskUpdateWorld, priority: String) -> Result<(), eyre::Report> {
    update_stored_task(world, &json!({ "priority": priority }))
}
