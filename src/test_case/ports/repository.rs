//! Repository port for generated test cases.

use crate::task::domain::TaskId;
use crate::test_case::domain::{NewTestCase, TestCase, TestCaseId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for test-case repository operations.
pub type TestCaseRepositoryResult<T> = Result<T, TestCaseRepositoryError>;

/// Test-case persistence contract. Records are never modified; they are
/// removed only together with their task.
#[async_trait]
pub trait TestCaseRepository: Send + Sync {
    /// Stores a new test case and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TestCaseRepositoryError::Persistence`] when the write fails,
    /// including when the task no longer exists.
    async fn store(&self, test_case: &NewTestCase) -> TestCaseRepositoryResult<TestCase>;

    /// Finds a test case by identifier.
    async fn find_by_id(&self, id: TestCaseId) -> TestCaseRepositoryResult<Option<TestCase>>;

    /// Returns the test cases of a task in creation order.
    async fn list_for_task(&self, task_id: TaskId) -> TestCaseRepositoryResult<Vec<TestCase>>;

    /// Deletes the test cases of a task and returns how many were removed.
    async fn delete_for_task(&self, task_id: TaskId) -> TestCaseRepositoryResult<usize>;
}

/// Errors returned by test-case repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TestCaseRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TestCaseRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
