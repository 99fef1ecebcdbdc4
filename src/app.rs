//! Task List App
//!
//! Root component: wires the controller to the store and kicks off the
//! initial load.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::HttpTaskApi;
use crate::components::{NewTaskForm, NoticeStack, SummaryBar, TaskListView};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::controller::TaskController;
use crate::notify::{BrowserUi, NoticeBoard};
use crate::store::AppState;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let notices = NoticeBoard::new(config.notice_timeout_ms);
    let controller = TaskController::new(
        HttpTaskApi::new(&config.api_base_url),
        store,
        BrowserUi::new(notices),
    );

    let ctx = AppContext::new(controller, store, notices);
    provide_context(ctx);

    tracing::debug!(api = %config.api_base_url, "loading tasks");
    ctx.load_all();

    view! {
        <div class="container">
            <header class="header">
                <h1>"Todo List"</h1>
            </header>

            <NewTaskForm />
            <SummaryBar />
            <TaskListView />
        </div>
        <NoticeStack />
    }
}
