//! Application services for property workflow orchestration.

mod tracker;

pub use tracker::{
    CompleteTaskRequest, PropertyWorkflowService, RegisterPropertyRequest, WorkflowServiceError,
    WorkflowServiceResult,
};
