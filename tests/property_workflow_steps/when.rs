//! When steps for property workflow BDD scenarios.

use super::world::{PropertyWorld, run_async};
use eyre::WrapErr;
use refit::workflow::services::CompleteTaskRequest;
use rstest_bdd_macros::when;

#[when("the property is registered")]
fn property_is_registered(world: &mut PropertyWorld) -> Result<(), eyre::Report> {
    let request = world.pending_request.clone();
    let registered = run_async(world.service.register_property(request))
        .wrap_err("register property for scenario")?;
    world.property = Some(registered);
    Ok(())
}

#[when(r#"task "{task_key}" is marked complete"#)]
fn task_is_marked_complete(
    world: &mut PropertyWorld,
    task_key: String,
) -> Result<(), eyre::Report> {
    let property_id = world.registered()?.id();
    let updated = run_async(
        world
            .service
            .complete_task(CompleteTaskRequest::new(property_id, task_key)),
    )
    .wrap_err("complete task in scenario")?;
    world.property = Some(updated);
    Ok(())
}

#[when(r#"the power status changes to "{status}""#)]
fn power_status_changes(world: &mut PropertyWorld, status: String) -> Result<(), eyre::Report> {
    let property_id = world.registered()?.id();
    let updated = run_async(world.service.update_power_status(property_id, &status))
        .wrap_err("update power status in scenario")?;
    world.property = Some(updated);
    Ok(())
}
