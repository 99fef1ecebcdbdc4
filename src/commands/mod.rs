//! Task API Bindings
//!
//! The remote task service, behind a trait so the controller can run against
//! the real HTTP client or an in-memory fake.

mod task;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Task, TaskId};

pub use task::HttpTaskApi;

/// Remote task service
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /api/tasks`
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// `POST /api/tasks`
    async fn create_task(&self, title: &str) -> Result<Task, ApiError>;

    /// `PUT /api/tasks/{id}`
    async fn update_task(&self, id: &TaskId, completed: bool) -> Result<Task, ApiError>;

    /// `DELETE /api/tasks/{id}`
    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError>;
}
