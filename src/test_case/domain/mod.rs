//! Domain model for generated test cases.

mod error;
mod test_case;

pub use error::TestCaseDomainError;
pub use test_case::{GherkinScenario, NewTestCase, PersistedTestCaseData, TestCase, TestCaseId};
