//! Error types for workflow domain validation and parsing.

use super::{TaskKey, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating workflow domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowDomainError {
    /// The task key is empty or contains whitespace.
    #[error("invalid task key '{0}', expected a non-empty identifier without whitespace")]
    InvalidTaskKey(String),

    /// No task with the given key exists in the property's task list.
    #[error("unknown task: {0}")]
    UnknownTask(TaskKey),

    /// A persisted task carries a blocking reason that disagrees with its
    /// status.
    #[error("task {key} has status {status} but blocking reason presence is {has_reason}")]
    InconsistentBlockedReason {
        /// Key of the offending task.
        key: TaskKey,
        /// Persisted status.
        status: TaskStatus,
        /// Whether a blocking reason was supplied.
        has_reason: bool,
    },

    /// A persisted task list holds more than one task with the same key.
    #[error("duplicate task in task list: {0}")]
    DuplicateTask(TaskKey),
}

/// Errors returned while building or loading a workflow configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowConfigError {
    /// A key occurs more than once in the workflow order.
    #[error("duplicate key in workflow order: {0}")]
    DuplicateOrderKey(TaskKey),

    /// A parallel group has no members.
    #[error("parallel group '{0}' has no members")]
    EmptyParallelGroup(String),

    /// A parallel group member is absent from the workflow order.
    #[error("parallel group '{group}' member {key} is not in the workflow order")]
    UnorderedGroupMember {
        /// Group name.
        group: String,
        /// Member key missing from the order.
        key: TaskKey,
    },

    /// A key belongs to more than one parallel group.
    #[error("key {0} belongs to more than one parallel group")]
    OverlappingGroups(TaskKey),

    /// The final-stage key is absent from the workflow order.
    #[error("final stage key {0} is not in the workflow order")]
    UnorderedFinalStage(TaskKey),

    /// The configuration document could not be parsed.
    #[error("failed to parse workflow configuration: {0}")]
    Parse(String),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while strictly parsing power statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown power status: {0}")]
pub struct ParsePowerStatusError(pub String);

/// Error returned while parsing property attribute names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown property attribute: {0}")]
pub struct ParsePropertyAttributeError(pub String);
