//! Step definitions for test case generation scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
