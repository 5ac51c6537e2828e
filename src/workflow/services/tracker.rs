//! Service layer for registering properties and progressing their tasks.

use crate::workflow::{
    domain::{
        PowerStatus, PropertyAttribute, PropertyAttributes, PropertyId, PropertyRecord,
        PropertyWorkflow, TaskKey, WorkflowConfig, WorkflowDomainError, recommend,
    },
    ports::{PropertyRepository, PropertyRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Request payload for registering a property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterPropertyRequest {
    attributes: PropertyAttributes,
    power_status: Option<String>,
}

impl RegisterPropertyRequest {
    /// Creates a request with no attributes and an unchecked power status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the attribute flags.
    #[must_use]
    pub fn with_attributes(mut self, attributes: PropertyAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Switches on one attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: PropertyAttribute) -> Self {
        self.attributes.set(attribute, true);
        self
    }

    /// Sets the raw power status as captured by the form.
    #[must_use]
    pub fn with_power_status(mut self, power_status: impl Into<String>) -> Self {
        self.power_status = Some(power_status.into());
        self
    }
}

/// Request payload for marking a task complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTaskRequest {
    property_id: PropertyId,
    task_key: String,
}

impl CompleteTaskRequest {
    /// Creates a completion request.
    #[must_use]
    pub fn new(property_id: PropertyId, task_key: impl Into<String>) -> Self {
        Self {
            property_id,
            task_key: task_key.into(),
        }
    }
}

/// Service-level errors for property workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] WorkflowDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] PropertyRepositoryError),
}

/// Result type for property workflow service operations.
pub type WorkflowServiceResult<T> = Result<T, WorkflowServiceError>;

/// Property workflow orchestration service.
///
/// Mutations load the stored workflow, re-evaluate an owned copy and write
/// it back while holding the service's update lock.
#[derive(Clone)]
pub struct PropertyWorkflowService<R, C>
where
    R: PropertyRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: Arc<WorkflowConfig>,
    update_lock: Arc<Mutex<()>>,
}

impl<R, C> PropertyWorkflowService<R, C>
where
    R: PropertyRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service using the standard workflow configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, Arc::new(WorkflowConfig::standard()))
    }

    /// Creates a service with an explicit workflow configuration.
    #[must_use]
    pub fn with_config(repository: Arc<R>, clock: Arc<C>, config: Arc<WorkflowConfig>) -> Self {
        Self {
            repository,
            clock,
            config,
            update_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the workflow configuration in use.
    #[must_use]
    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Registers a property, seeding and evaluating its tasks.
    ///
    /// An unrecognized power status is recorded as not checked.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Repository`] when the repository
    /// rejects persistence.
    pub async fn register_property(
        &self,
        request: RegisterPropertyRequest,
    ) -> WorkflowServiceResult<PropertyWorkflow> {
        let power_status = request
            .power_status
            .as_deref()
            .map_or(PowerStatus::NotChecked, PowerStatus::from_str_lossy);
        let record = PropertyRecord::new(request.attributes, power_status);
        let workflow = PropertyWorkflow::new(record, &self.config, &*self.clock);
        self.repository.store(&workflow).await?;
        tracing::info!(
            property = %workflow.id(),
            tasks = workflow.tasks().len(),
            %power_status,
            "property registered"
        );
        Ok(workflow)
    }

    /// Records a new power status for a property and re-evaluates its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Repository`] when the property does
    /// not exist or persistence fails.
    pub async fn update_power_status(
        &self,
        property_id: PropertyId,
        power_status: &str,
    ) -> WorkflowServiceResult<PropertyWorkflow> {
        let power_status = PowerStatus::from_str_lossy(power_status);
        let _guard = self.update_lock.lock().await;
        let mut workflow = self.load(property_id).await?;
        workflow.set_power_status(power_status, &self.config, &*self.clock);
        self.repository.update(&workflow).await?;
        tracing::info!(property = %property_id, %power_status, "power status updated");
        Ok(workflow)
    }

    /// Marks a task complete and re-evaluates the property's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Domain`] when the key is malformed or
    /// names no task of the property, and
    /// [`WorkflowServiceError::Repository`] when the property does not exist
    /// or persistence fails.
    pub async fn complete_task(
        &self,
        request: CompleteTaskRequest,
    ) -> WorkflowServiceResult<PropertyWorkflow> {
        let task_key = TaskKey::new(request.task_key)?;
        let _guard = self.update_lock.lock().await;
        let mut workflow = self.load(request.property_id).await?;
        workflow.complete_task(&task_key, &self.config, &*self.clock)?;
        self.repository.update(&workflow).await?;
        tracing::info!(property = %request.property_id, task = %task_key, "task completed");
        Ok(workflow)
    }

    /// Returns the next actions for a property as display strings.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Repository`] when the property does
    /// not exist or lookup fails.
    pub async fn next_actions(&self, property_id: PropertyId) -> WorkflowServiceResult<Vec<String>> {
        let workflow = self.load(property_id).await?;
        Ok(recommend(
            workflow.tasks(),
            workflow.record().power_status(),
            &self.config,
        ))
    }

    /// Retrieves a property workflow.
    ///
    /// Returns `Ok(None)` when the property has not been registered.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Repository`] when lookup fails.
    pub async fn find_by_id(
        &self,
        property_id: PropertyId,
    ) -> WorkflowServiceResult<Option<PropertyWorkflow>> {
        Ok(self.repository.find_by_id(property_id).await?)
    }

    /// Lists every registered property workflow.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Repository`] when lookup fails.
    pub async fn list_properties(&self) -> WorkflowServiceResult<Vec<PropertyWorkflow>> {
        Ok(self.repository.list().await?)
    }

    async fn load(&self, property_id: PropertyId) -> WorkflowServiceResult<PropertyWorkflow> {
        self.repository
            .find_by_id(property_id)
            .await?
            .ok_or(WorkflowServiceError::Repository(
                PropertyRepositoryError::NotFound(property_id),
            ))
    }
}
