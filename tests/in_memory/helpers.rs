//! Shared test helpers for in-memory repository integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use refit::workflow::{
    adapters::memory::InMemoryPropertyRepository,
    domain::{
        PowerStatus, PropertyAttribute, PropertyAttributes, PropertyRecord, PropertyWorkflow,
        WorkflowConfig,
    },
    services::PropertyWorkflowService,
};
use rstest::fixture;
use std::io;
use tokio::runtime::Runtime;

/// Service type wired to the in-memory adapter.
pub type MemoryService = PropertyWorkflowService<InMemoryPropertyRepository, DefaultClock>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryPropertyRepository {
    InMemoryPropertyRepository::new()
}

/// Provides a clock for workflow creation.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Provides the standard workflow configuration.
#[fixture]
pub fn config() -> WorkflowConfig {
    WorkflowConfig::standard()
}

/// Provides a service backed by a fresh in-memory repository.
#[fixture]
pub fn service() -> MemoryService {
    PropertyWorkflowService::new(
        Arc::new(InMemoryPropertyRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Seeds a workflow for a property with the given attributes.
pub fn workflow(
    attributes: impl IntoIterator<Item = PropertyAttribute>,
    power_status: PowerStatus,
    config: &WorkflowConfig,
    clock: &DefaultClock,
) -> PropertyWorkflow {
    let record = PropertyRecord::new(PropertyAttributes::with(attributes), power_status);
    PropertyWorkflow::new(record, config, clock)
}
