//! Mapping from service errors to HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::project::{ports::ProjectRepositoryError, services::ProjectServiceError};
use crate::task::{ports::TaskRepositoryError, services::TaskServiceError};
use crate::test_case::{ports::TestCaseRepositoryError, services::TestCaseServiceError};
use crate::user::{ports::UserRepositoryError, services::UserDirectoryError};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub message: String,
}

/// An error ready to be rendered as an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// `400 Bad Request`.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// `404 Not Found`.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// `500 Internal Server Error`. The cause is logged.
    #[must_use]
    pub fn internal(cause: &dyn std::error::Error) -> Self {
        error!(error = %cause, "request failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: cause.to_string(),
        }
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorBody {
            message: self.message.clone(),
        })
    }
}

impl From<TestCaseServiceError> for ApiError {
    fn from(err: TestCaseServiceError) -> Self {
        match err {
            TestCaseServiceError::InvalidRequest(_) => Self::bad_request(err.to_string()),
            TestCaseServiceError::TaskNotFound(_) | TestCaseServiceError::TestCaseNotFound(_) => {
                Self::not_found(err.to_string())
            }
            TestCaseServiceError::UpstreamUnavailable(_)
            | TestCaseServiceError::UpstreamInvalidResponse(_)
            | TestCaseServiceError::Tasks(_)
            | TestCaseServiceError::Storage(_) => Self::internal(&err),
        }
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            TaskRepositoryError::Persistence(_) => Self::internal(&err),
        }
    }
}

impl From<ProjectRepositoryError> for ApiError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            ProjectRepositoryError::Persistence(_) => Self::internal(&err),
        }
    }
}

impl From<TestCaseRepositoryError> for ApiError {
    fn from(err: TestCaseRepositoryError) -> Self {
        Self::internal(&err)
    }
}

impl From<UserRepositoryError> for ApiError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound(_) => Self::not_found(err.to_string()),
            UserRepositoryError::DuplicateEmail(_) => Self::bad_request(err.to_string()),
            UserRepositoryError::Persistence(_) => Self::internal(&err),
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Domain(_) | TaskServiceError::AlreadyAssigned { .. } => {
                Self::bad_request(err.to_string())
            }
            TaskServiceError::ProjectNotFound(_) => Self::not_found(err.to_string()),
            TaskServiceError::Repository(inner) => inner.into(),
            TaskServiceError::Projects(inner) => inner.into(),
            TaskServiceError::Users(inner) => inner.into(),
            TaskServiceError::TestCases(inner) => inner.into(),
        }
    }
}

impl From<ProjectServiceError> for ApiError {
    fn from(err: ProjectServiceError) -> Self {
        match err {
            ProjectServiceError::Domain(_) => Self::bad_request(err.to_string()),
            ProjectServiceError::Repository(inner) => inner.into(),
            ProjectServiceError::Users(inner) => inner.into(),
            ProjectServiceError::Tasks(inner) => inner.into(),
            ProjectServiceError::TestCases(inner) => inner.into(),
        }
    }
}

impl From<UserDirectoryError> for ApiError {
    fn from(err: UserDirectoryError) -> Self {
        match err {
            UserDirectoryError::Domain(_) => Self::bad_request(err.to_string()),
            UserDirectoryError::Repository(inner) => inner.into(),
        }
    }
}
