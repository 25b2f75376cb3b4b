//! Port contracts for test-case generation.

pub mod generator;
pub mod repository;

pub use generator::{GeneratorError, GherkinGenerator};
pub use repository::{TestCaseRepository, TestCaseRepositoryError, TestCaseRepositoryResult};

#[cfg(test)]
pub use generator::MockGherkinGenerator;
