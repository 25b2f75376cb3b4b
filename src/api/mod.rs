//! JSON HTTP surface for SprintHub.
//!
//! Handlers are thin: they decode the request, call one service, and map the
//! outcome to a response. Every failure body has the shape
//! `{"message": "..."}`.

mod dto;
mod error;
mod handlers;
mod state;

pub use dto::{
    CreateProjectBody, CreateTaskBody, CreateUserBody, GenerateTestCaseBody,
    GenerateTestCaseResponse, ProjectResponse, TaskResponse, TestCaseResponse, UpdateProjectBody,
    UpdateStatusBody, UpdateTaskBody, UpdateUserBody, UserResponse,
};
pub use error::{ApiError, ErrorBody};
pub use handlers::configure;
pub use state::{
    AppState, ProjectApiService, Repositories, TaskApiService, TestCaseApiService, UserApiService,
};

#[cfg(test)]
mod tests;
