//! In-memory repository for property workflows.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::workflow::{
    domain::{PropertyId, PropertyWorkflow},
    ports::{PropertyRepository, PropertyRepositoryError, PropertyRepositoryResult},
};

/// Thread-safe in-memory property repository.
///
/// Each write replaces a whole workflow under the lock, so readers never see
/// a partially evaluated task list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPropertyRepository {
    state: Arc<RwLock<InMemoryPropertyState>>,
}

#[derive(Debug, Default)]
struct InMemoryPropertyState {
    workflows: HashMap<PropertyId, PropertyWorkflow>,
    registration_order: Vec<PropertyId>,
}

impl InMemoryPropertyRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> PropertyRepositoryResult<RwLockReadGuard<'_, InMemoryPropertyState>> {
        self.state.read().map_err(|err| {
            PropertyRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> PropertyRepositoryResult<RwLockWriteGuard<'_, InMemoryPropertyState>> {
        self.state.write().map_err(|err| {
            PropertyRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn store(&self, workflow: &PropertyWorkflow) -> PropertyRepositoryResult<()> {
        let mut state = self.write()?;
        if state.workflows.contains_key(&workflow.id()) {
            return Err(PropertyRepositoryError::DuplicateProperty(workflow.id()));
        }
        state.registration_order.push(workflow.id());
        state.workflows.insert(workflow.id(), workflow.clone());
        Ok(())
    }

    async fn update(&self, workflow: &PropertyWorkflow) -> PropertyRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .workflows
            .get_mut(&workflow.id())
            .ok_or(PropertyRepositoryError::NotFound(workflow.id()))?;
        *stored = workflow.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: PropertyId) -> PropertyRepositoryResult<Option<PropertyWorkflow>> {
        let state = self.read()?;
        Ok(state.workflows.get(&id).cloned())
    }

    async fn list(&self) -> PropertyRepositoryResult<Vec<PropertyWorkflow>> {
        let state = self.read()?;
        Ok(state
            .registration_order
            .iter()
            .filter_map(|id| state.workflows.get(id).cloned())
            .collect())
    }
}
