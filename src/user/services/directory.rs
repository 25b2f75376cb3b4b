//! Service layer for registering, editing, and listing users.

use crate::user::{
    domain::{EmailAddress, NewUser, User, UserDomainError, UserId, UserName, UserRole},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    name: String,
    email: String,
    role: String,
}

impl RegisterUserRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Request payload for editing a user. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
}

impl UpdateUserRequest {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the replacement role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user directory service operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User registration and lookup service.
pub struct UserDirectoryService<U>
where
    U: UserRepository + ?Sized,
{
    repository: Arc<U>,
}

impl<U> Clone for UserDirectoryService<U>
where
    U: UserRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<U> UserDirectoryService<U>
where
    U: UserRepository + ?Sized,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] for invalid fields and
    /// [`UserDirectoryError::Repository`] when the email is taken or
    /// persistence fails.
    pub async fn register(&self, request: RegisterUserRequest) -> UserDirectoryResult<User> {
        let RegisterUserRequest { name, email, role } = request;
        let new_user = NewUser {
            name: UserName::new(name)?,
            email: EmailAddress::new(email)?,
            role: UserRole::try_from(role.as_str()).map_err(UserDomainError::from)?,
        };
        Ok(self.repository.store(&new_user).await?)
    }

    /// Returns a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] (wrapped) when the user does
    /// not exist.
    pub async fn get(&self, id: UserId) -> UserDirectoryResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserRepositoryError::NotFound(id).into())
    }

    /// Returns all users.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when lookup fails.
    pub async fn list(&self) -> UserDirectoryResult<Vec<User>> {
        Ok(self.repository.list_all().await?)
    }

    /// Applies a patch to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError`] when the user is missing, a field is
    /// invalid, or persistence fails.
    pub async fn update(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> UserDirectoryResult<User> {
        let mut user = self.get(id).await?;
        if let Some(name) = request.name {
            user.rename(UserName::new(name)?);
        }
        if let Some(email) = request.email {
            user.change_email(EmailAddress::new(email)?);
        }
        if let Some(role) = request.role {
            user.change_role(UserRole::try_from(role.as_str()).map_err(UserDomainError::from)?);
        }
        self.repository.update(&user).await?;
        Ok(user)
    }
}
