//! Error types for user domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user identifier is not a positive integer.
    #[error("invalid user identifier {0}, expected a positive integer")]
    InvalidUserId(i64),

    /// The display name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyName,

    /// The display name exceeds the storage limit.
    #[error("user name exceeds {max} characters: {length}")]
    NameTooLong {
        /// Maximum permitted length.
        max: usize,
        /// Length of the rejected value.
        length: usize,
    },

    /// The email address is malformed or too long.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The role is not one of the supported roles.
    #[error(transparent)]
    InvalidRole(#[from] ParseUserRoleError),
}

/// Error returned while parsing user roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseUserRoleError(pub String);
