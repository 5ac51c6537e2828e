//! Shared world state for property workflow BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use refit::workflow::{
    adapters::memory::InMemoryPropertyRepository,
    domain::PropertyWorkflow,
    services::{PropertyWorkflowService, RegisterPropertyRequest},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestPropertyService = PropertyWorkflowService<InMemoryPropertyRepository, DefaultClock>;

/// Scenario world for property workflow behaviour tests.
pub struct PropertyWorld {
    pub service: TestPropertyService,
    pub pending_request: RegisterPropertyRequest,
    pub property: Option<PropertyWorkflow>,
}

impl PropertyWorld {
    /// Creates a world with an empty registration request.
    #[must_use]
    pub fn new() -> Self {
        let service = PropertyWorkflowService::new(
            Arc::new(InMemoryPropertyRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            pending_request: RegisterPropertyRequest::new(),
            property: None,
        }
    }

    /// Returns the registered property or an error when none exists yet.
    pub fn registered(&self) -> Result<&PropertyWorkflow, eyre::Report> {
        self.property
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing registered property in scenario world"))
    }
}

impl Default for PropertyWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PropertyWorld {
    PropertyWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
