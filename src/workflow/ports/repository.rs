//! Repository port for property workflow persistence.

use crate::workflow::domain::{PropertyId, PropertyWorkflow};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for property repository operations.
pub type PropertyRepositoryResult<T> = Result<T, PropertyRepositoryError>;

/// Property workflow persistence contract.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Stores a newly registered property and its task list.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::DuplicateProperty`] when the
    /// property identifier already exists.
    async fn store(&self, workflow: &PropertyWorkflow) -> PropertyRepositoryResult<()>;

    /// Replaces the stored workflow for an existing property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::NotFound`] when the property does
    /// not exist.
    async fn update(&self, workflow: &PropertyWorkflow) -> PropertyRepositoryResult<()>;

    /// Finds a property workflow by identifier.
    ///
    /// Returns `None` when the property does not exist.
    async fn find_by_id(&self, id: PropertyId) -> PropertyRepositoryResult<Option<PropertyWorkflow>>;

    /// Returns every stored property workflow in registration order.
    async fn list(&self) -> PropertyRepositoryResult<Vec<PropertyWorkflow>>;
}

/// Errors returned by property repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PropertyRepositoryError {
    /// A property with the same identifier already exists.
    #[error("duplicate property identifier: {0}")]
    DuplicateProperty(PropertyId),

    /// The property was not found.
    #[error("property not found: {0}")]
    NotFound(PropertyId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PropertyRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
