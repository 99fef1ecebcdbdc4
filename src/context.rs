//! Application Context
//!
//! Controller, store and notice board provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpTaskApi;
use crate::controller::TaskController;
use crate::models::TaskId;
use crate::notify::{BrowserUi, NoticeBoard};
use crate::store::AppStore;

pub type WebController = TaskController<HttpTaskApi, AppStore, BrowserUi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<WebController>,
    pub store: AppStore,
    pub notices: NoticeBoard,
}

impl AppContext {
    pub fn new(controller: WebController, store: AppStore, notices: NoticeBoard) -> Self {
        Self {
            controller: StoredValue::new(controller),
            store,
            notices,
        }
    }

    pub fn controller(&self) -> WebController {
        self.controller.get_value()
    }

    // Failures are already reported by the controller, so results are dropped.

    pub fn load_all(&self) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.load_all().await;
        });
    }

    pub fn toggle(&self, id: TaskId) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.toggle(&id).await;
        });
    }

    pub fn delete(&self, id: TaskId) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.delete(&id).await;
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
