//! Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The controller only
//! sees the [`TaskStore`] trait, so its logic runs against any backing state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::render::{self, ListView};
use crate::task_list::{Summary, TaskList};

/// Client state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirror of the server's tasks
    pub tasks: TaskList,
    /// Add request in flight
    pub adding: bool,
    /// Initial load in flight
    pub loading: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Mutation seam used by the task controller
pub trait TaskStore {
    /// Read the task list without subscribing to it
    fn with_tasks<R>(&self, f: impl FnOnce(&TaskList) -> R) -> R;
    fn update_tasks<R>(&self, f: impl FnOnce(&mut TaskList) -> R) -> R;
    fn set_adding(&self, adding: bool);
    fn set_loading(&self, loading: bool);
}

impl TaskStore for AppStore {
    fn with_tasks<R>(&self, f: impl FnOnce(&TaskList) -> R) -> R {
        f(&*self.tasks().read_untracked())
    }

    fn update_tasks<R>(&self, f: impl FnOnce(&mut TaskList) -> R) -> R {
        f(&mut *self.tasks().write())
    }

    fn set_adding(&self, adding: bool) {
        *self.adding().write() = adding;
    }

    fn set_loading(&self, loading: bool) {
        *self.loading().write() = loading;
    }
}

// ========================
// Tracked Readers (for views)
// ========================

/// Current list projection; subscribes to tasks and the loading flag
pub fn store_list_view(store: &AppStore) -> ListView {
    let loading = store.loading().get();
    render::project(&*store.tasks().read(), loading)
}

pub fn store_summary(store: &AppStore) -> Summary {
    store.tasks().read().summary()
}

pub fn store_adding(store: &AppStore) -> bool {
    store.adding().get()
}
