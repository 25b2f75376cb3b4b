//! `PostgreSQL` repository implementation for generated test cases.

use super::{
    models::{NewTestCaseRow, TestCaseRow},
    schema::test_cases,
};
use crate::persistence::{PgPool, run_blocking_with};
use crate::task::domain::TaskId;
use crate::test_case::{
    domain::{GherkinScenario, NewTestCase, PersistedTestCaseData, TestCase, TestCaseId},
    ports::{TestCaseRepository, TestCaseRepositoryError, TestCaseRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed test-case repository.
#[derive(Debug, Clone)]
pub struct PostgresTestCaseRepository {
    pool: PgPool,
}

impl PostgresTestCaseRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TestCaseRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TestCaseRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        run_blocking_with(
            &self.pool,
            f,
            TestCaseRepositoryError::persistence,
            TestCaseRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl TestCaseRepository for PostgresTestCaseRepository {
    async fn store(&self, test_case: &NewTestCase) -> TestCaseRepositoryResult<TestCase> {
        let row = NewTestCaseRow {
            task_id: test_case.task_id.value(),
            gherkin: test_case.gherkin.as_str().to_owned(),
            created_at: test_case.created_at,
        };
        self.run_blocking(move |connection| {
            let stored = diesel::insert_into(test_cases::table)
                .values(&row)
                .returning(TestCaseRow::as_returning())
                .get_result(connection)
                .map_err(TestCaseRepositoryError::persistence)?;
            row_to_test_case(stored)
        })
        .await
    }

    async fn find_by_id(&self, id: TestCaseId) -> TestCaseRepositoryResult<Option<TestCase>> {
        self.run_blocking(move |connection| {
            let row = test_cases::table
                .find(id.value())
                .select(TestCaseRow::as_select())
                .first::<TestCaseRow>(connection)
                .optional()
                .map_err(TestCaseRepositoryError::persistence)?;
            row.map(row_to_test_case).transpose()
        })
        .await
    }

    async fn list_for_task(&self, task_id: TaskId) -> TestCaseRepositoryResult<Vec<TestCase>> {
        self.run_blocking(move |connection| {
            let rows = test_cases::table
                .filter(test_cases::task_id.eq(task_id.value()))
                .order(test_cases::id.asc())
                .select(TestCaseRow::as_select())
                .load::<TestCaseRow>(connection)
                .map_err(TestCaseRepositoryError::persistence)?;
            rows.into_iter().map(row_to_test_case).collect()
        })
        .await
    }

    async fn delete_for_task(&self, task_id: TaskId) -> TestCaseRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            diesel::delete(test_cases::table.filter(test_cases::task_id.eq(task_id.value())))
                .execute(connection)
                .map_err(TestCaseRepositoryError::persistence)
        })
        .await
    }
}

fn row_to_test_case(row: TestCaseRow) -> TestCaseRepositoryResult<TestCase> {
    let TestCaseRow {
        id,
        task_id,
        gherkin,
        created_at,
    } = row;

    let fields = NewTestCase {
        task_id: TaskId::new(task_id).map_err(TestCaseRepositoryError::persistence)?,
        gherkin: GherkinScenario::new(gherkin).map_err(TestCaseRepositoryError::persistence)?,
        created_at,
    };
    Ok(TestCase::from_persisted(PersistedTestCaseData {
        id: TestCaseId::new(id).map_err(TestCaseRepositoryError::persistence)?,
        fields,
    }))
}
