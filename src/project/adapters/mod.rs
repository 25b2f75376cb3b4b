//! Adapter implementations for the project directory ports.

pub mod memory;
pub mod postgres;
