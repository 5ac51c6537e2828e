//! In-memory adapters for property workflow persistence.

mod property;

pub use property::InMemoryPropertyRepository;
