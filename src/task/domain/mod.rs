//! Domain model for tasks.
//!
//! Status and priority are closed enumerations; free-form strings are parsed
//! at the boundary and rejected when unrecognized.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskDescription, TaskId, TaskLabels, TaskTitle};
pub use status::{TaskPriority, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task};
