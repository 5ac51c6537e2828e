//! Port contracts for the property workflow.
//!
//! Ports define infrastructure-agnostic interfaces used by workflow services.

pub mod repository;

pub use repository::{PropertyRepository, PropertyRepositoryError, PropertyRepositoryResult};
