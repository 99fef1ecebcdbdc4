//! Error Types
//!
//! API failures and the user-facing action they belong to.

use std::fmt;

use thiserror::Error;

/// Failure talking to the remote task API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// User action a failure is reported against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Add,
    Update,
    Delete,
}

impl Action {
    /// Fixed notification text shown when this action fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Action::Load => "Failed to load tasks. Please refresh the page.",
            Action::Add => "Failed to add task. Please try again.",
            Action::Update => "Failed to update task. Please try again.",
            Action::Delete => "Failed to delete task. Please try again.",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Load => "load",
            Action::Add => "add",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Error returned by the task controller operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("{action} failed: {source}")]
    Api {
        action: Action,
        #[source]
        source: ApiError,
    },
}

impl ClientError {
    pub fn api(action: Action, source: ApiError) -> Self {
        ClientError::Api { action, source }
    }

    /// Message surfaced to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::EmptyTitle => "Please enter a task title.",
            ClientError::Api { action, .. } => action.failure_message(),
        }
    }
}
