//! Task Item Component
//!
//! One row: completion toggle, title, delete button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render::TaskRow;

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();

    let id = row.id.clone();
    let toggle = Callback::new(move |_: ()| ctx.toggle(id.clone()));
    let id = row.id.clone();
    let delete = move |_| ctx.delete(id.clone());

    view! {
        <div class="task-item" data-task-id=row.id.to_string()>
            <div
                class=row.checkbox_class()
                role="button"
                tabindex="0"
                aria-label=row.checkbox_label()
                on:click=move |_| toggle.run(())
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        ev.prevent_default();
                        toggle.run(());
                    }
                }
            ></div>
            // Text node: the title is never parsed as markup
            <div class=row.content_class()>{row.title.clone()}</div>
            <div class="task-actions">
                <button
                    class="btn btn-small btn-danger"
                    aria-label="Delete task"
                    on:click=delete
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
