//! Error types for test-case domain validation.

use thiserror::Error;

/// Errors returned while constructing test-case values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TestCaseDomainError {
    /// The test-case identifier is not a positive integer.
    #[error("invalid test case identifier {0}, expected a positive integer")]
    InvalidTestCaseId(i64),

    /// The generated scenario text is empty.
    #[error("gherkin scenario must not be empty")]
    EmptyGherkin,
}
