//! Frontend Models
//!
//! Data structures matching the remote task API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque task identifier, always assigned by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Task record (canonical form returned by the server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of `POST /api/tasks`
#[derive(Debug, Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
}

/// Body of `PUT /api/tasks/{id}`
#[derive(Debug, Serialize)]
pub struct UpdateTaskArgs {
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_accepts_document_store_id() {
        let task: Task = serde_json::from_value(json!({
            "_id": "65a1f0",
            "title": "Buy milk",
            "completed": true,
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(task.id, TaskId::from("65a1f0"));
        assert_eq!(task.title, "Buy milk");
        assert!(task.completed);
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let task: Task = serde_json::from_value(json!({ "id": "1", "title": "A" })).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn test_request_bodies() {
        let create = serde_json::to_value(CreateTaskArgs { title: "A" }).unwrap();
        assert_eq!(create, json!({ "title": "A" }));

        let update = serde_json::to_value(UpdateTaskArgs { completed: true }).unwrap();
        assert_eq!(update, json!({ "completed": true }));
    }
}
