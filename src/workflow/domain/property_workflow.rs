//! Property workflow aggregate root.

use super::{
    NextAction, PowerStatus, PropertyId, PropertyRecord, Task, TaskKey, WorkflowConfig,
    WorkflowDomainError, actions::next_actions, catalogue::build_task_seed, rules::evaluate,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A property together with its evaluated task list.
///
/// Deserialization rejects task lists that repeat a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedWorkflowData")]
pub struct PropertyWorkflow {
    record: PropertyRecord,
    tasks: Vec<Task>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted workflow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedWorkflowData {
    /// Persisted property record.
    pub record: PropertyRecord,
    /// Persisted task list.
    pub tasks: Vec<Task>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl PropertyWorkflow {
    /// Seeds and evaluates the task list for a property.
    #[must_use]
    pub fn new(record: PropertyRecord, config: &WorkflowConfig, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let tasks = evaluate(&build_task_seed(&record), record.power_status(), config);
        Self {
            record,
            tasks,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a workflow from persisted storage and re-applies every
    /// gate under `config`.
    ///
    /// Timestamps are kept as stored; re-evaluation is not an update.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::DuplicateTask`] when the stored task
    /// list holds two tasks with the same key.
    pub fn from_persisted(
        data: PersistedWorkflowData,
        config: &WorkflowConfig,
    ) -> Result<Self, WorkflowDomainError> {
        let mut workflow = Self::try_from(data)?;
        workflow.tasks = evaluate(&workflow.tasks, workflow.record.power_status(), config);
        Ok(workflow)
    }

    /// Returns the property identifier.
    #[must_use]
    pub const fn id(&self) -> PropertyId {
        self.record.id()
    }

    /// Returns the property record.
    #[must_use]
    pub const fn record(&self) -> &PropertyRecord {
        &self.record
    }

    /// Returns the ordered task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given key.
    #[must_use]
    pub fn task(&self, key: &TaskKey) -> Option<&Task> {
        self.tasks.iter().find(|task| task.key() == key)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Records a new power status and re-evaluates every gate.
    pub fn set_power_status(
        &mut self,
        power_status: PowerStatus,
        config: &WorkflowConfig,
        clock: &impl Clock,
    ) {
        self.record.set_power_status(power_status);
        self.reevaluate(config, clock);
    }

    /// Marks a task complete and re-evaluates every gate.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::UnknownTask`] when the property has no
    /// task with this key.
    pub fn complete_task(
        &mut self,
        key: &TaskKey,
        config: &WorkflowConfig,
        clock: &impl Clock,
    ) -> Result<(), WorkflowDomainError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.key() == key)
            .ok_or_else(|| WorkflowDomainError::UnknownTask(key.clone()))?;
        if let Some(reason) = task.blocked_reason() {
            tracing::warn!(task = %key, %reason, "completing a blocked task");
        }
        task.mark_complete();
        self.reevaluate(config, clock);
        Ok(())
    }

    /// Returns the prioritized next actions.
    #[must_use]
    pub fn next_actions(&self, config: &WorkflowConfig) -> Vec<NextAction> {
        next_actions(&self.tasks, self.record.power_status(), config)
    }

    fn reevaluate(&mut self, config: &WorkflowConfig, clock: &impl Clock) {
        self.tasks = evaluate(&self.tasks, self.record.power_status(), config);
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl TryFrom<PersistedWorkflowData> for PropertyWorkflow {
    type Error = WorkflowDomainError;

    fn try_from(data: PersistedWorkflowData) -> Result<Self, Self::Error> {
        let mut seen = BTreeSet::new();
        if let Some(duplicate) = data.tasks.iter().find(|task| !seen.insert(task.key())) {
            return Err(WorkflowDomainError::DuplicateTask(duplicate.key().clone()));
        }
        Ok(Self {
            record: data.record,
            tasks: data.tasks,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }
}
