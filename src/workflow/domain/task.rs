//! Task record and its status types.

use super::{ParseTaskStatusError, TaskKey, WorkflowDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status.
///
/// `Complete` is terminal: gate re-evaluation moves tasks between
/// `NotStarted` and `Blocked` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Open and ready to be worked on.
    #[default]
    NotStarted,
    /// Held back by a gate.
    Blocked,
    /// Done.
    Complete,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Blocked => "blocked",
            Self::Complete => "complete",
        }
    }

    /// Returns whether the status is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "blocked" => Ok(Self::Blocked),
            "complete" => Ok(Self::Complete),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Why a task is blocked. Serialized as its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockedReason {
    /// The task needs power and the property is not power-ready.
    #[serde(rename = "Power not ready")]
    PowerNotReady,
    /// The final-stage task is waiting on every other task.
    #[serde(rename = "Complete other required tasks first")]
    OtherTasksIncomplete,
    /// A predecessor in the workflow order is not complete.
    #[serde(rename = "Complete earlier workflow stage first")]
    EarlierStageIncomplete,
}

impl BlockedReason {
    /// Returns the text shown next to a blocked task.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PowerNotReady => "Power not ready",
            Self::OtherTasksIncomplete => "Complete other required tasks first",
            Self::EarlierStageIncomplete => "Complete earlier workflow stage first",
        }
    }
}

impl fmt::Display for BlockedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One unit of renovation or inspection work tracked against a property.
///
/// Deserialization goes through [`Task::from_persisted`], so a loaded task
/// always carries a blocking reason exactly when it is blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedTaskData")]
pub struct Task {
    key: TaskKey,
    name: String,
    requires_power: bool,
    status: TaskStatus,
    blocked_reason: Option<BlockedReason>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedTaskData {
    /// Persisted task key.
    pub key: TaskKey,
    /// Persisted display name.
    pub name: String,
    /// Whether the task needs power.
    pub requires_power: bool,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted blocking reason.
    #[serde(default)]
    pub blocked_reason: Option<BlockedReason>,
}

impl Task {
    /// Creates a task that has not been started.
    #[must_use]
    pub fn new(key: TaskKey, name: impl Into<String>, requires_power: bool) -> Self {
        Self {
            key,
            name: name.into(),
            requires_power,
            status: TaskStatus::NotStarted,
            blocked_reason: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::InconsistentBlockedReason`] unless a
    /// blocking reason is present exactly when the status is `Blocked`.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, WorkflowDomainError> {
        let is_blocked = data.status == TaskStatus::Blocked;
        if is_blocked != data.blocked_reason.is_some() {
            return Err(WorkflowDomainError::InconsistentBlockedReason {
                key: data.key,
                status: data.status,
                has_reason: data.blocked_reason.is_some(),
            });
        }
        Ok(Self {
            key: data.key,
            name: data.name,
            requires_power: data.requires_power,
            status: data.status,
            blocked_reason: data.blocked_reason,
        })
    }

    /// Returns the task key.
    #[must_use]
    pub const fn key(&self) -> &TaskKey {
        &self.key
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the task needs power.
    #[must_use]
    pub const fn requires_power(&self) -> bool {
        self.requires_power
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the blocking reason, present only while blocked.
    #[must_use]
    pub const fn blocked_reason(&self) -> Option<BlockedReason> {
        self.blocked_reason
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns whether the task can be worked on now.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.status, TaskStatus::NotStarted)
    }

    /// Marks the task complete. Completion is never undone.
    pub const fn mark_complete(&mut self) {
        self.status = TaskStatus::Complete;
        self.blocked_reason = None;
    }

    /// Returns a copy with the outcome of gate evaluation applied.
    ///
    /// Complete tasks keep their status; everything else becomes blocked for
    /// `gate` or reopens when `gate` is `None`.
    #[must_use]
    pub(crate) fn gated(&self, gate: Option<BlockedReason>) -> Self {
        let (status, blocked_reason) = match (self.status, gate) {
            (TaskStatus::Complete, _) => (TaskStatus::Complete, None),
            (_, Some(reason)) => (TaskStatus::Blocked, Some(reason)),
            (_, None) => (TaskStatus::NotStarted, None),
        };
        Self {
            key: self.key.clone(),
            name: self.name.clone(),
            requires_power: self.requires_power,
            status,
            blocked_reason,
        }
    }
}

impl TryFrom<PersistedTaskData> for Task {
    type Error = WorkflowDomainError;

    fn try_from(data: PersistedTaskData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}
