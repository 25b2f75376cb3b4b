//! Application services for task tracking.

mod tracker;

pub use tracker::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
