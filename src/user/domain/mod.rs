//! Domain model for the user directory.

mod error;
mod ids;
mod user;

pub use error::{ParseUserRoleError, UserDomainError};
pub use ids::{EmailAddress, UserId, UserName};
pub use user::{NewUser, PersistedUserData, User, UserRole};
