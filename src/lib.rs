//! Refit: renovation and inspection task tracking for void properties.
//!
//! This crate decides, from a property's attributes and its power
//! readiness, which renovation tasks apply, which are blocked and why, and
//! what should be worked on next.
//!
//! # Architecture
//!
//! Refit follows hexagonal architecture principles:
//!
//! - **Domain**: Pure workflow rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`workflow`]: Task seeding, gate evaluation and next-action
//!   recommendation

pub mod workflow;
