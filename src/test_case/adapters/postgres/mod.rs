//! `PostgreSQL` adapters for generated test cases.

mod models;
mod repository;
mod schema;

pub use repository::PostgresTestCaseRepository;
