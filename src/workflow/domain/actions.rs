//! Prioritized "what to do next" list.

use super::{PowerStatus, Task, WorkflowConfig};
use std::fmt;

/// Most task lines a recommendation contains.
pub const MAX_TASK_ACTIONS: usize = 10;

/// Banner shown once every task is complete.
pub const COMPLETION_BANNER: &str = "All tasks complete ✅";

/// Hint shown while power-dependent work is waiting on power.
pub const POWER_HINT: &str =
    "Tip: power is not ready, so tasks that need power are on hold. Do surveys and drawings first.";

/// One line of the next-action list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextAction {
    /// Every task is complete.
    AllComplete,
    /// An open task to work on.
    Task(String),
    /// Power-dependent work is outstanding.
    PowerHint,
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllComplete => f.write_str(COMPLETION_BANNER),
            Self::Task(name) => write!(f, "• {name}"),
            Self::PowerHint => f.write_str(POWER_HINT),
        }
    }
}

/// Selects and orders open tasks for display.
///
/// Open tasks are sorted by workflow position with ad hoc keys last; the
/// sort is stable so ties keep seed order. An empty task list yields no
/// actions at all.
#[must_use]
pub fn next_actions(
    tasks: &[Task],
    power_status: PowerStatus,
    config: &WorkflowConfig,
) -> Vec<NextAction> {
    let mut open: Vec<&Task> = tasks.iter().filter(|task| task.is_open()).collect();
    open.sort_by_key(|task| config.position(task.key()).unwrap_or(usize::MAX));

    let mut actions = Vec::with_capacity(MAX_TASK_ACTIONS + 2);
    let all_complete = !tasks.is_empty() && tasks.iter().all(Task::is_complete);
    if all_complete {
        actions.push(NextAction::AllComplete);
    }

    actions.extend(
        open.into_iter()
            .take(MAX_TASK_ACTIONS)
            .map(|task| NextAction::Task(task.name().to_owned())),
    );

    let power_work_waiting = tasks
        .iter()
        .any(|task| task.requires_power() && !task.is_complete());
    if !power_status.is_ready() && power_work_waiting {
        actions.push(NextAction::PowerHint);
    }

    actions
}

/// Renders [`next_actions`] as display strings.
#[must_use]
pub fn recommend(tasks: &[Task], power_status: PowerStatus, config: &WorkflowConfig) -> Vec<String> {
    next_actions(tasks, power_status, config)
        .iter()
        .map(ToString::to_string)
        .collect()
}
