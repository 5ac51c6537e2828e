//! Shared builders for workflow unit tests.

use crate::workflow::domain::{
    PowerStatus, PropertyAttribute, PropertyAttributes, PropertyRecord, Task, TaskKey,
    WorkflowConfig, build_task_seed, evaluate,
};

/// Builds a task key, panicking on malformed test input.
pub fn key(value: &str) -> TaskKey {
    TaskKey::new(value).expect("valid task key")
}

/// Builds a property record with the given attributes.
pub fn property(
    attributes: impl IntoIterator<Item = PropertyAttribute>,
    power_status: PowerStatus,
) -> PropertyRecord {
    PropertyRecord::new(PropertyAttributes::with(attributes), power_status)
}

/// Seeds the task list for the given attributes.
pub fn seeded(attributes: impl IntoIterator<Item = PropertyAttribute>) -> Vec<Task> {
    build_task_seed(&property(attributes, PowerStatus::NotChecked))
}

/// Marks the named tasks complete, as the external "mark complete" action
/// would.
pub fn complete(mut tasks: Vec<Task>, keys: &[&str]) -> Vec<Task> {
    for task in &mut tasks {
        if keys.contains(&task.key().as_str()) {
            task.mark_complete();
        }
    }
    tasks
}

/// Evaluates with the standard configuration.
pub fn evaluate_standard(tasks: &[Task], power_status: PowerStatus) -> Vec<Task> {
    evaluate(tasks, power_status, &WorkflowConfig::standard())
}

/// Finds a task by key, panicking when absent.
pub fn find<'a>(tasks: &'a [Task], wanted: &str) -> &'a Task {
    tasks
        .iter()
        .find(|task| task.key() == wanted)
        .expect("task should be present")
}

/// Returns the keys of a task list in order.
pub fn keys_of(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.key().as_str()).collect()
}
