//! Dependency resolution over the workflow order.

use super::{TaskKey, WorkflowConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Predecessor-completion requirement of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "keys", rename_all = "snake_case")]
pub enum Requirement {
    /// The task with this key must be complete.
    Single(TaskKey),
    /// At least one of these tasks must be complete. Keys follow the
    /// workflow order.
    AnyOf(Vec<TaskKey>),
}

impl Requirement {
    /// Returns whether the requirement holds given the completed keys.
    #[must_use]
    pub fn is_satisfied_by(&self, completed: &BTreeSet<&TaskKey>) -> bool {
        match self {
            Self::Single(key) => completed.contains(key),
            Self::AnyOf(keys) => keys.iter().any(|key| completed.contains(key)),
        }
    }
}

/// Computes the requirements `task_key` has on its predecessors.
///
/// Only predecessors present for this property count. Predecessors sharing
/// the task's parallel group are skipped, and predecessors in another group
/// collapse into one [`Requirement::AnyOf`] over that group's present,
/// preceding members. Keys not in the workflow order have no requirements.
#[must_use]
pub fn requirements_for(
    config: &WorkflowConfig,
    task_key: &TaskKey,
    present_keys: &BTreeSet<&TaskKey>,
) -> Vec<Requirement> {
    let Some(index) = config.position(task_key) else {
        return Vec::new();
    };
    let own_group = config.group_of(task_key);
    let predecessors = config.order().iter().take(index);

    let mut requirements = Vec::new();
    for predecessor in predecessors.clone() {
        if !present_keys.contains(predecessor) {
            continue;
        }
        let requirement = match config.group_of(predecessor) {
            Some(group) if Some(group) == own_group => continue,
            Some(group) => Requirement::AnyOf(
                predecessors
                    .clone()
                    .filter(|key| config.group_of(key) == Some(group))
                    .filter(|key| present_keys.contains(*key))
                    .cloned()
                    .collect(),
            ),
            None => Requirement::Single(predecessor.clone()),
        };
        if !requirements.contains(&requirement) {
            requirements.push(requirement);
        }
    }
    requirements
}
