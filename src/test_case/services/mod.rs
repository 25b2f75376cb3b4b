//! Application services for test-case generation.

mod relay;

pub use relay::{TestCaseGenerationService, TestCaseServiceError, TestCaseServiceResult};
