//! Generation relay: task description in, stored Gherkin test case out.

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::test_case::{
    domain::{NewTestCase, TestCase, TestCaseId},
    ports::{GeneratorError, GherkinGenerator, TestCaseRepository, TestCaseRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for test-case operations.
#[derive(Debug, Error)]
pub enum TestCaseServiceError {
    /// The task identifier is malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The referenced test case does not exist.
    #[error("test case not found: {0}")]
    TestCaseNotFound(TestCaseId),

    /// The generator could not be reached or answered with a failure
    /// status.
    #[error("error contacting generator: {0}")]
    UpstreamUnavailable(String),

    /// The generator answered without a usable scenario.
    #[error("generator returned an invalid response: {0}")]
    UpstreamInvalidResponse(String),

    /// Task lookup failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Test-case persistence failed.
    #[error(transparent)]
    Storage(#[from] TestCaseRepositoryError),
}

impl From<GeneratorError> for TestCaseServiceError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::Unavailable(reason) => Self::UpstreamUnavailable(reason),
            GeneratorError::InvalidResponse(reason) => Self::UpstreamInvalidResponse(reason),
        }
    }
}

/// Result type for test-case service operations.
pub type TestCaseServiceResult<T> = Result<T, TestCaseServiceError>;

/// Relays task descriptions to the generator and stores the results.
pub struct TestCaseGenerationService<T, R, G, C>
where
    T: TaskRepository + ?Sized,
    R: TestCaseRepository + ?Sized,
    G: GherkinGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    test_cases: Arc<R>,
    generator: Arc<G>,
    clock: Arc<C>,
}

impl<T, R, G, C> Clone for TestCaseGenerationService<T, R, G, C>
where
    T: TaskRepository + ?Sized,
    R: TestCaseRepository + ?Sized,
    G: GherkinGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            test_cases: Arc::clone(&self.test_cases),
            generator: Arc::clone(&self.generator),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<T, R, G, C> TestCaseGenerationService<T, R, G, C>
where
    T: TaskRepository + ?Sized,
    R: TestCaseRepository + ?Sized,
    G: GherkinGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new generation service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        test_cases: Arc<R>,
        generator: Arc<G>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            test_cases,
            generator,
            clock,
        }
    }

    /// Generates and stores a test case for the task `raw_task_id`.
    ///
    /// Only the task description is sent to the generator. Exactly one row
    /// is written on success and none on failure. Calls are not idempotent;
    /// repeating one stores another test case.
    ///
    /// # Errors
    ///
    /// Returns [`TestCaseServiceError::InvalidRequest`] for a non-positive
    /// id, [`TestCaseServiceError::TaskNotFound`] for an unknown task, the
    /// `Upstream*` variants for generator failures, and
    /// [`TestCaseServiceError::Storage`] when the write fails.
    pub async fn generate(&self, raw_task_id: i64) -> TestCaseServiceResult<TestCase> {
        let task_id = TaskId::new(raw_task_id)
            .map_err(|err| TestCaseServiceError::InvalidRequest(err.to_string()))?;
        let task = self.require_task(task_id).await?;

        info!(task_id = task_id.value(), "requesting gherkin for task");
        let gherkin = self
            .generator
            .generate(task.description().as_str())
            .await
            .map_err(|err| {
                warn!(task_id = task_id.value(), error = %err, "gherkin generation failed");
                TestCaseServiceError::from(err)
            })?;

        let stored = self
            .test_cases
            .store(&NewTestCase::new(task_id, gherkin, &*self.clock))
            .await?;
        info!(
            task_id = task_id.value(),
            test_case_id = stored.id().value(),
            "stored generated test case"
        );
        Ok(stored)
    }

    /// Returns the test cases of a task in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TestCaseServiceError::TaskNotFound`] when the task is
    /// missing.
    pub async fn list_for_task(&self, task_id: TaskId) -> TestCaseServiceResult<Vec<TestCase>> {
        self.require_task(task_id).await?;
        Ok(self.test_cases.list_for_task(task_id).await?)
    }

    /// Returns a single test case.
    ///
    /// # Errors
    ///
    /// Returns [`TestCaseServiceError::TestCaseNotFound`] when it is
    /// missing.
    pub async fn find(&self, id: TestCaseId) -> TestCaseServiceResult<TestCase> {
        self.test_cases
            .find_by_id(id)
            .await?
            .ok_or(TestCaseServiceError::TestCaseNotFound(id))
    }

    async fn require_task(&self, task_id: TaskId) -> TestCaseServiceResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TestCaseServiceError::TaskNotFound(task_id))
    }
}
