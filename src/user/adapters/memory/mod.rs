//! In-memory adapters for the user directory.

mod user;

pub use user::InMemoryUserRepository;
