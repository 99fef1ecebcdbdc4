//! Task List View Component
//!
//! Loading indicator, empty placeholder, or the rows.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::use_app_context;
use crate::render::{ListView, TaskRow};
use crate::store::store_list_view;

#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_context().store;
    let list_view = Memo::new(move |_| store_list_view(&store));

    let rows = move || {
        list_view.with(|view| match view {
            ListView::Rows(rows) => rows.clone(),
            _ => Vec::<TaskRow>::new(),
        })
    };

    view! {
        <Show when=move || list_view.with(|view| *view == ListView::Loading)>
            <div class="loading">"Loading tasks..."</div>
        </Show>
        <Show when=move || list_view.with(|view| *view == ListView::Empty)>
            <div class="empty-state">
                <p>"No tasks yet. Add one above to get started!"</p>
            </div>
        </Show>
        <Show when=move || list_view.with(|view| matches!(view, ListView::Rows(_)))>
            <div class="tasks-list">
                <For
                    each=rows
                    key=|row| (row.id.clone(), row.completed, row.title.clone())
                    children=move |row| view! { <TaskItem row=row /> }
                />
            </div>
        </Show>
    }
}
