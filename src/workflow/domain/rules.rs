//! Gate evaluation for a property's task list.
//!
//! Gates are checked per task in a fixed precedence and the first match
//! wins:
//!
//! 1. complete tasks are left alone;
//! 2. tasks needing power are blocked until the property is power-ready;
//! 3. the final-stage task is blocked until power is ready and every other
//!    task is complete;
//! 4. tasks with an unmet workflow-order requirement are blocked;
//! 5. anything else is open.
//!
//! Evaluation is pure and idempotent: it returns a new list and running it
//! again on its own output changes nothing.

use super::{
    BlockedReason, PowerStatus, Task, TaskKey, WorkflowConfig, resolver::requirements_for,
};
use std::collections::BTreeSet;

/// Returns the keys of all tasks in the list.
#[must_use]
pub fn present_keys(tasks: &[Task]) -> BTreeSet<&TaskKey> {
    tasks.iter().map(Task::key).collect()
}

/// Returns the keys of the complete tasks in the list.
#[must_use]
pub fn completed_keys(tasks: &[Task]) -> BTreeSet<&TaskKey> {
    tasks
        .iter()
        .filter(|task| task.is_complete())
        .map(Task::key)
        .collect()
}

/// Applies every gate to every task and returns the updated list.
#[must_use]
pub fn evaluate(tasks: &[Task], power_status: PowerStatus, config: &WorkflowConfig) -> Vec<Task> {
    let context = GateContext {
        config,
        power_ready: power_status.is_ready(),
        present: present_keys(tasks),
        completed: completed_keys(tasks),
        incomplete_count: tasks.iter().filter(|task| !task.is_complete()).count(),
    };

    tasks
        .iter()
        .map(|task| {
            let gate = context.gate_for(task);
            if let Some(reason) = gate {
                tracing::debug!(task = %task.key(), %reason, "task gated");
            }
            task.gated(gate)
        })
        .collect()
}

struct GateContext<'a> {
    config: &'a WorkflowConfig,
    power_ready: bool,
    present: BTreeSet<&'a TaskKey>,
    completed: BTreeSet<&'a TaskKey>,
    incomplete_count: usize,
}

impl GateContext<'_> {
    fn gate_for(&self, task: &Task) -> Option<BlockedReason> {
        if task.is_complete() {
            return None;
        }
        if task.requires_power() && !self.power_ready {
            return Some(BlockedReason::PowerNotReady);
        }
        if self.config.is_final_stage(task.key()) {
            if !self.power_ready {
                return Some(BlockedReason::PowerNotReady);
            }
            // The task itself is the only incomplete one allowed.
            if self.incomplete_count > 1 {
                return Some(BlockedReason::OtherTasksIncomplete);
            }
        }
        let unmet = requirements_for(self.config, task.key(), &self.present)
            .iter()
            .any(|requirement| !requirement.is_satisfied_by(&self.completed));
        unmet.then_some(BlockedReason::EarlierStageIncomplete)
    }
}
