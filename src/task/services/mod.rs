//! Application services for task management.

mod management;
mod requests;

pub use management::{TaskManagementService, TaskServiceError, TaskServiceResult};
pub use requests::{CreateTaskRequest, UpdateTaskRequest};
