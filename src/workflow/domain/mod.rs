//! Domain model for the property task workflow.
//!
//! The domain derives a property's tasks from its attributes, gates them on
//! power readiness and workflow order, and recommends what to do next. It
//! has no I/O; persistence lives behind the ports.

mod actions;
pub mod catalogue;
mod config;
mod error;
mod ids;
mod power;
mod property;
mod property_workflow;
mod resolver;
mod rules;
mod task;

pub use actions::{
    COMPLETION_BANNER, MAX_TASK_ACTIONS, NextAction, POWER_HINT, next_actions, recommend,
};
pub use catalogue::build_task_seed;
pub use config::{ParallelGroup, WorkflowConfig};
pub use error::{
    ParsePowerStatusError, ParsePropertyAttributeError, ParseTaskStatusError, WorkflowConfigError,
    WorkflowDomainError,
};
pub use ids::{PropertyId, TaskKey};
pub use power::PowerStatus;
pub use property::{PropertyAttribute, PropertyAttributes, PropertyRecord};
pub use property_workflow::{PersistedWorkflowData, PropertyWorkflow};
pub use resolver::{Requirement, requirements_for};
pub use rules::{completed_keys, evaluate, present_keys};
pub use task::{BlockedReason, PersistedTaskData, Task, TaskStatus};
