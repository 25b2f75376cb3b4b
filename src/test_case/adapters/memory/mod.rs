//! In-memory adapters for test-case generation.

mod generator;
mod test_case;

pub use generator::StaticGherkinGenerator;
pub use test_case::InMemoryTestCaseRepository;
