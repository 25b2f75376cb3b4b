//! Error types for project domain validation.

use thiserror::Error;

/// Errors returned while constructing project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project identifier is not a positive integer.
    #[error("invalid project identifier {0}, expected a positive integer")]
    InvalidProjectId(i64),

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyName,

    /// The project name exceeds the storage limit.
    #[error("project name exceeds {max} characters: {length}")]
    NameTooLong {
        /// Maximum permitted length.
        max: usize,
        /// Length of the rejected value.
        length: usize,
    },

    /// The project description is empty after trimming.
    #[error("project description must not be empty")]
    EmptyDescription,

    /// The project description exceeds the storage limit.
    #[error("project description exceeds {max} characters: {length}")]
    DescriptionTooLong {
        /// Maximum permitted length.
        max: usize,
        /// Length of the rejected value.
        length: usize,
    },

    /// Progress is outside `0..=100`.
    #[error("project progress {0} is outside 0..=100")]
    InvalidProgress(i64),

    /// The end date precedes the start date.
    #[error("project end date precedes its start date")]
    EndBeforeStart,
}
