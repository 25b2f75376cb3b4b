//! In-memory adapters for the project directory.

mod project;

pub use project::InMemoryProjectRepository;
