//! Then steps for property workflow BDD scenarios.

use super::world::{PropertyWorld, run_async};
use refit::workflow::domain::{POWER_HINT, Task, TaskStatus};
use rstest_bdd_macros::then;

fn find_task<'a>(world: &'a PropertyWorld, task_key: &str) -> Result<&'a Task, eyre::Report> {
    world
        .registered()?
        .tasks()
        .iter()
        .find(|task| task.key().as_str() == task_key)
        .ok_or_else(|| eyre::eyre!("task {task_key} is not in the property's list"))
}

fn next_actions(world: &PropertyWorld) -> Result<Vec<String>, eyre::Report> {
    let property_id = world.registered()?.id();
    Ok(run_async(world.service.next_actions(property_id))?)
}

#[then("the property has {count:u64} tasks")]
fn property_has_tasks(world: &PropertyWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = world.registered()?.tasks().len();
    if u64::try_from(actual)? != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then(r#"task "{task_key}" is open"#)]
fn task_is_open(world: &PropertyWorld, task_key: String) -> Result<(), eyre::Report> {
    let task = find_task(world, &task_key)?;
    if task.status() != TaskStatus::NotStarted || task.blocked_reason().is_some() {
        return Err(eyre::eyre!(
            "expected {task_key} to be open, found {} ({:?})",
            task.status(),
            task.blocked_reason()
        ));
    }
    Ok(())
}

#[then(r#"task "{task_key}" is blocked with reason "{reason}""#)]
fn task_is_blocked(
    world: &PropertyWorld,
    task_key: String,
    reason: String,
) -> Result<(), eyre::Report> {
    let task = find_task(world, &task_key)?;
    let actual_reason = task.blocked_reason().map(|blocked| blocked.to_string());
    if task.status() != TaskStatus::Blocked || actual_reason.as_deref() != Some(reason.as_str()) {
        return Err(eyre::eyre!(
            "expected {task_key} blocked with '{reason}', found {} ({actual_reason:?})",
            task.status()
        ));
    }
    Ok(())
}

#[then("the next actions list {count:u64} tasks")]
fn next_actions_list_tasks(world: &PropertyWorld, count: u64) -> Result<(), eyre::Report> {
    let actions = next_actions(world)?;
    let task_lines = actions.iter().filter(|line| line.starts_with("• ")).count();
    if u64::try_from(task_lines)? != count {
        return Err(eyre::eyre!(
            "expected {count} task lines, found {task_lines} in {actions:?}"
        ));
    }
    Ok(())
}

#[then("the next actions include the power hint")]
fn next_actions_include_hint(world: &PropertyWorld) -> Result<(), eyre::Report> {
    let actions = next_actions(world)?;
    let hints = actions.iter().filter(|line| line.as_str() == POWER_HINT).count();
    if hints != 1 {
        return Err(eyre::eyre!("expected exactly one power hint in {actions:?}"));
    }
    Ok(())
}

#[then("the next actions do not include the power hint")]
fn next_actions_exclude_hint(world: &PropertyWorld) -> Result<(), eyre::Report> {
    let actions = next_actions(world)?;
    if actions.iter().any(|line| line.as_str() == POWER_HINT) {
        return Err(eyre::eyre!("unexpected power hint in {actions:?}"));
    }
    Ok(())
}
