//! Renovation and inspection task workflow for a property.
//!
//! Derives the applicable tasks from a property's attributes, gates each
//! task on power readiness, the final stage and the workflow order, and
//! recommends what to work on next. The module follows hexagonal
//! architecture:
//!
//! - Domain types and rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
