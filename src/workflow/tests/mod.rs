//! Unit tests for the workflow module.
//!
//! Tests are organised by component: the aggregate, seeding, configuration,
//! dependency resolution, gate evaluation, next-action recommendation, and
//! the service layer.

mod support;
