//! Task Controller
//!
//! All task mutations go through here: call the API, apply the canonical
//! record to the store, report failures once.

use std::sync::Arc;

use crate::commands::TaskApi;
use crate::error::{Action, ClientError};
use crate::models::{Task, TaskId};
use crate::store::TaskStore;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this task?";

/// Interactive surface the controller reports to
pub trait ClientUi {
    /// Show a transient error notification
    fn notify_error(&self, message: &str);
    /// Ask the user to confirm; `false` means declined
    fn confirm(&self, message: &str) -> bool;
}

/// Clears the add-button busy flag when dropped
struct AddingGuard<'a, S: TaskStore>(&'a S);

impl<'a, S: TaskStore> AddingGuard<'a, S> {
    fn set(store: &'a S) -> Self {
        store.set_adding(true);
        Self(store)
    }
}

impl<S: TaskStore> Drop for AddingGuard<'_, S> {
    fn drop(&mut self) {
        self.0.set_adding(false);
    }
}

pub struct TaskController<A, S, U> {
    api: Arc<A>,
    store: S,
    ui: U,
}

impl<A, S: Clone, U: Clone> Clone for TaskController<A, S, U> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            store: self.store.clone(),
            ui: self.ui.clone(),
        }
    }
}

impl<A, S, U> TaskController<A, S, U>
where
    A: TaskApi,
    S: TaskStore,
    U: ClientUi,
{
    pub fn new(api: A, store: S, ui: U) -> Self {
        Self {
            api: Arc::new(api),
            store,
            ui,
        }
    }

    fn report(&self, err: ClientError) -> ClientError {
        tracing::error!(error = %err, "task action failed");
        self.ui.notify_error(err.user_message());
        err
    }

    /// Fetch every task and replace local state; returns the task count
    pub async fn load_all(&self) -> Result<usize, ClientError> {
        self.store.set_loading(true);
        let result = self.api.list_tasks().await;
        self.store.set_loading(false);

        let tasks = result.map_err(|e| self.report(ClientError::api(Action::Load, e)))?;
        let count = self.store.update_tasks(|list| {
            list.replace_all(tasks);
            list.len()
        });
        tracing::info!(count, "tasks loaded");
        Ok(count)
    }

    /// Create a task from a non-blank title and prepend the server's record
    pub async fn create(&self, title: &str) -> Result<Task, ClientError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(self.report(ClientError::EmptyTitle));
        }

        let _busy = AddingGuard::set(&self.store);
        let task = self
            .api
            .create_task(title)
            .await
            .map_err(|e| self.report(ClientError::api(Action::Add, e)))?;

        self.store.update_tasks(|list| list.insert_front(task.clone()));
        tracing::debug!(id = %task.id, "task created");
        Ok(task)
    }

    /// Flip `completed` on the server and mirror the result
    ///
    /// Returns `Ok(None)` when the task is not present locally, or when the
    /// response to a later toggle of the same task was already applied.
    pub async fn toggle(&self, id: &TaskId) -> Result<Option<Task>, ClientError> {
        let Some(completed) = self
            .store
            .with_tasks(|list| list.get(id).map(|task| !task.completed))
        else {
            tracing::debug!(%id, "toggle ignored, task not in list");
            return Ok(None);
        };
        let ticket = self.store.update_tasks(|list| list.begin_toggle());

        let task = self
            .api
            .update_task(id, completed)
            .await
            .map_err(|e| self.report(ClientError::api(Action::Update, e)))?;

        let applied = self
            .store
            .update_tasks(|list| list.finish_toggle(ticket, task.clone()));
        if !applied {
            tracing::debug!(%id, "stale toggle response dropped");
            return Ok(None);
        }
        tracing::debug!(%id, completed = task.completed, "task toggled");
        Ok(Some(task))
    }

    /// Delete after confirmation; returns `false` if the user declined
    pub async fn delete(&self, id: &TaskId) -> Result<bool, ClientError> {
        if !self.ui.confirm(DELETE_CONFIRM_MESSAGE) {
            return Ok(false);
        }

        self.api
            .delete_task(id)
            .await
            .map_err(|e| self.report(ClientError::api(Action::Delete, e)))?;

        self.store.update_tasks(|list| list.remove(id));
        tracing::debug!(%id, "task deleted");
        Ok(true)
    }
}
