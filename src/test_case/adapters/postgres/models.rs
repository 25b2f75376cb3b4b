//! Diesel row models for test-case persistence.

use super::schema::test_cases;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for test-case records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = test_cases)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TestCaseRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Originating task.
    pub task_id: i64,
    /// Generated Gherkin text.
    pub gherkin: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for test-case records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = test_cases)]
pub struct NewTestCaseRow {
    /// Originating task.
    pub task_id: i64,
    /// Generated Gherkin text.
    pub gherkin: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
