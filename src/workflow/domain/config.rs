//! Workflow configuration: task ordering and parallel groups.
//!
//! A [`WorkflowConfig`] is an immutable value handed to the resolver and the
//! rule evaluator. Keys listed in the order are "known" and take part in
//! dependency gating; any other key is ad hoc and never gated by order.

use super::{TaskKey, WorkflowConfigError, catalogue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Set of task keys that never gate each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelGroup {
    name: String,
    members: Vec<TaskKey>,
}

impl ParallelGroup {
    /// Creates a named group.
    #[must_use]
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = TaskKey>) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().collect(),
        }
    }

    /// Returns the group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group members as declared.
    #[must_use]
    pub fn members(&self) -> &[TaskKey] {
        &self.members
    }
}

/// Serialized shape of a workflow configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RawWorkflowConfig {
    order: Vec<TaskKey>,
    #[serde(default)]
    parallel_groups: Vec<ParallelGroup>,
    #[serde(default)]
    final_stage: Option<TaskKey>,
}

/// Validated task ordering, parallel groups and final-stage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkflowConfig", into = "RawWorkflowConfig")]
pub struct WorkflowConfig {
    order: Vec<TaskKey>,
    parallel_groups: Vec<ParallelGroup>,
    final_stage: Option<TaskKey>,
    positions: HashMap<TaskKey, usize>,
    group_index: HashMap<TaskKey, usize>,
}

impl WorkflowConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowConfigError`] when the order repeats a key, a group
    /// is empty, a group member is not ordered, a key sits in two groups, or
    /// the final-stage key is not ordered.
    pub fn new(
        order: Vec<TaskKey>,
        parallel_groups: Vec<ParallelGroup>,
        final_stage: Option<TaskKey>,
    ) -> Result<Self, WorkflowConfigError> {
        let mut positions = HashMap::with_capacity(order.len());
        for (position, key) in order.iter().enumerate() {
            if positions.insert(key.clone(), position).is_some() {
                return Err(WorkflowConfigError::DuplicateOrderKey(key.clone()));
            }
        }

        let mut group_index = HashMap::new();
        for (index, group) in parallel_groups.iter().enumerate() {
            if group.members.is_empty() {
                return Err(WorkflowConfigError::EmptyParallelGroup(group.name.clone()));
            }
            for member in &group.members {
                if !positions.contains_key(member) {
                    return Err(WorkflowConfigError::UnorderedGroupMember {
                        group: group.name.clone(),
                        key: member.clone(),
                    });
                }
                if group_index
                    .insert(member.clone(), index)
                    .is_some_and(|previous| previous != index)
                {
                    return Err(WorkflowConfigError::OverlappingGroups(member.clone()));
                }
            }
        }

        if let Some(final_key) = final_stage.as_ref() {
            if !positions.contains_key(final_key) {
                return Err(WorkflowConfigError::UnorderedFinalStage(final_key.clone()));
            }
        }

        Ok(Self {
            order,
            parallel_groups,
            final_stage,
            positions,
            group_index,
        })
    }

    /// Returns the canonical renovation workflow.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            known_keys(catalogue::STANDARD_ORDER),
            vec![
                ParallelGroup::new("preparation", known_keys(catalogue::PREPARATION_GROUP)),
                ParallelGroup::new("works", known_keys(catalogue::WORKS_GROUP)),
                ParallelGroup::new("finishes", known_keys(catalogue::FINISHES_GROUP)),
            ],
            Some(TaskKey::known(catalogue::keys::EPC_EICR)),
        )
        .unwrap_or_else(|_| Self::unordered())
    }

    /// Returns a configuration with no ordering at all: only the power gate
    /// applies.
    #[must_use]
    pub fn unordered() -> Self {
        Self {
            order: Vec::new(),
            parallel_groups: Vec::new(),
            final_stage: None,
            positions: HashMap::new(),
            group_index: HashMap::new(),
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowConfigError::Parse`] for malformed JSON and the
    /// validation errors of [`WorkflowConfig::new`] otherwise.
    pub fn from_json(document: &str) -> Result<Self, WorkflowConfigError> {
        let raw: RawWorkflowConfig = serde_json::from_str(document)
            .map_err(|err| WorkflowConfigError::Parse(err.to_string()))?;
        Self::try_from(raw)
    }

    /// Returns the ordered known keys.
    #[must_use]
    pub fn order(&self) -> &[TaskKey] {
        &self.order
    }

    /// Returns the parallel groups.
    #[must_use]
    pub fn parallel_groups(&self) -> &[ParallelGroup] {
        &self.parallel_groups
    }

    /// Returns the final-stage key, if the workflow has one.
    #[must_use]
    pub const fn final_stage(&self) -> Option<&TaskKey> {
        self.final_stage.as_ref()
    }

    /// Returns whether `key` is the final-stage key.
    #[must_use]
    pub fn is_final_stage(&self, key: &TaskKey) -> bool {
        self.final_stage.as_ref() == Some(key)
    }

    /// Returns the position of `key` in the order, or `None` for ad hoc keys.
    #[must_use]
    pub fn position(&self, key: &TaskKey) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Returns the index of the parallel group containing `key`.
    #[must_use]
    pub fn group_of(&self, key: &TaskKey) -> Option<usize> {
        self.group_index.get(key).copied()
    }

    /// Returns whether two keys share a parallel group.
    #[must_use]
    pub fn are_parallel(&self, a: &TaskKey, b: &TaskKey) -> bool {
        self.group_of(a)
            .is_some_and(|group| self.group_of(b) == Some(group))
    }
}

fn known_keys(keys: &[&'static str]) -> Vec<TaskKey> {
    keys.iter().copied().map(TaskKey::known).collect()
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<RawWorkflowConfig> for WorkflowConfig {
    type Error = WorkflowConfigError;

    fn try_from(raw: RawWorkflowConfig) -> Result<Self, Self::Error> {
        Self::new(raw.order, raw.parallel_groups, raw.final_stage)
    }
}

impl From<WorkflowConfig> for RawWorkflowConfig {
    fn from(config: WorkflowConfig) -> Self {
        Self {
            order: config.order,
            parallel_groups: config.parallel_groups,
            final_stage: config.final_stage,
        }
    }
}
