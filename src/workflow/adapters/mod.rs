//! Adapter implementations for property workflow ports.

pub mod memory;
