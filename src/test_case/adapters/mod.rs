//! Adapter implementations for the test-case ports.

pub mod http;
pub mod memory;
pub mod postgres;
