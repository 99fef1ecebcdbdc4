//! New Task Form Component
//!
//! Title input with the add button; Enter submits.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::store_adding;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (new_title, set_new_title) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_adding(&store) {
            return;
        }
        let title = new_title.get_untracked();
        let controller = ctx.controller();

        spawn_local(async move {
            if controller.create(&title).await.is_ok() {
                set_new_title.set(String::new());
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
        });
    };

    let adding = move || store_adding(&store);

    view! {
        <form class="add-task-form" on:submit=create_task>
            <input
                type="text"
                class="task-input"
                placeholder="What needs to be done?"
                node_ref=input_ref
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="btn btn-primary"
                disabled=adding
                style:opacity=move || if adding() { "0.7" } else { "1" }
            >
                {move || if adding() { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}
