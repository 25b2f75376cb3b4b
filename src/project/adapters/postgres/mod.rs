//! `PostgreSQL` adapters for the project directory.

mod models;
mod repository;
mod schema;

pub use repository::PostgresProjectRepository;
