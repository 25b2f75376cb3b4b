//! In-memory test-case repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::domain::TaskId;
use crate::test_case::{
    domain::{NewTestCase, PersistedTestCaseData, TestCase, TestCaseId},
    ports::{TestCaseRepository, TestCaseRepositoryError, TestCaseRepositoryResult},
};

/// Thread-safe in-memory test-case repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTestCaseRepository {
    state: Arc<RwLock<InMemoryTestCaseState>>,
}

#[derive(Debug, Default)]
struct InMemoryTestCaseState {
    test_cases: BTreeMap<TestCaseId, TestCase>,
    last_id: i64,
}

impl InMemoryTestCaseRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TestCaseRepositoryError {
    TestCaseRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TestCaseRepository for InMemoryTestCaseRepository {
    async fn store(&self, test_case: &NewTestCase) -> TestCaseRepositoryResult<TestCase> {
        let mut state = self.state.write().map_err(lock_error)?;
        let id =
            TestCaseId::new(state.last_id + 1).map_err(TestCaseRepositoryError::persistence)?;
        state.last_id = id.value();
        let stored = TestCase::from_persisted(PersistedTestCaseData {
            id,
            fields: test_case.clone(),
        });
        state.test_cases.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: TestCaseId) -> TestCaseRepositoryResult<Option<TestCase>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.test_cases.get(&id).cloned())
    }

    async fn list_for_task(&self, task_id: TaskId) -> TestCaseRepositoryResult<Vec<TestCase>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .test_cases
            .values()
            .filter(|test_case| test_case.task_id() == task_id)
            .cloned()
            .collect())
    }

    async fn delete_for_task(&self, task_id: TaskId) -> TestCaseRepositoryResult<usize> {
        let mut state = self.state.write().map_err(lock_error)?;
        let before = state.test_cases.len();
        state
            .test_cases
            .retain(|_, test_case| test_case.task_id() != task_id);
        Ok(before - state.test_cases.len())
    }
}
