//! Outbound port for the external Gherkin generator.

use crate::test_case::domain::GherkinScenario;
use async_trait::async_trait;
use thiserror::Error;

/// Turns a user story into a Gherkin scenario.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GherkinGenerator: Send + Sync {
    /// Sends `user_story` to the generator and returns its scenario.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Unavailable`] when the call does not
    /// complete with a success status and [`GeneratorError::InvalidResponse`]
    /// when the reply carries no usable scenario.
    async fn generate(&self, user_story: &str) -> Result<GherkinScenario, GeneratorError>;
}

/// Failures reported by generator adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// Connection, timeout, or non-success status.
    #[error("generator unavailable: {0}")]
    Unavailable(String),

    /// The reply was not JSON or lacked a non-empty `gherkin` string.
    #[error("generator returned an invalid response: {0}")]
    InvalidResponse(String),
}
