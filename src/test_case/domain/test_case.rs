//! Generated test-case records.

use super::TestCaseDomainError;
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier for a generated test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestCaseId(i64);

impl TestCaseId {
    /// Creates a validated test-case identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TestCaseDomainError::InvalidTestCaseId`] when the value is
    /// zero or negative.
    pub const fn new(value: i64) -> Result<Self, TestCaseDomainError> {
        if value <= 0 {
            return Err(TestCaseDomainError::InvalidTestCaseId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TestCaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gherkin text returned by the generator.
///
/// Kept byte-for-byte as received; only the empty string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GherkinScenario(String);

impl GherkinScenario {
    /// Wraps generated text.
    ///
    /// # Errors
    ///
    /// Returns [`TestCaseDomainError::EmptyGherkin`] for an empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, TestCaseDomainError> {
        let text = value.into();
        if text.is_empty() {
            return Err(TestCaseDomainError::EmptyGherkin);
        }
        Ok(Self(text))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Test case awaiting a store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestCase {
    /// Originating task.
    pub task_id: TaskId,
    /// Generated scenario.
    pub gherkin: GherkinScenario,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewTestCase {
    /// Builds a new test case stamped with the current clock time.
    #[must_use]
    pub fn new(task_id: TaskId, gherkin: GherkinScenario, clock: &impl Clock) -> Self {
        Self {
            task_id,
            gherkin,
            created_at: clock.utc(),
        }
    }
}

/// Parameter object for reconstructing a persisted test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTestCaseData {
    /// Persisted identifier.
    pub id: TestCaseId,
    /// Persisted fields.
    pub fields: NewTestCase,
}

/// A stored Gherkin scenario generated for a task. Never modified after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    id: TestCaseId,
    task_id: TaskId,
    gherkin: GherkinScenario,
    created_at: DateTime<Utc>,
}

impl TestCase {
    /// Reconstructs a test case from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTestCaseData) -> Self {
        let PersistedTestCaseData { id, fields } = data;
        Self {
            id,
            task_id: fields.task_id,
            gherkin: fields.gherkin,
            created_at: fields.created_at,
        }
    }

    /// Returns the test-case identifier.
    #[must_use]
    pub const fn id(&self) -> TestCaseId {
        self.id
    }

    /// Returns the originating task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the generated scenario.
    #[must_use]
    pub const fn gherkin(&self) -> &GherkinScenario {
        &self.gherkin
    }

    /// Consumes the test case, yielding its scenario.
    #[must_use]
    pub fn into_gherkin(self) -> GherkinScenario {
        self.gherkin
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
