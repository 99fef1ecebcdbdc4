//! Notice Stack Component
//!
//! Fixed top-right stack of error notifications. Click to dismiss early.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let board = use_app_context().notices;

    view! {
        <div class="notice-stack" aria-live="polite">
            <For
                each=move || board.notices()
                key=|notice| (notice.id, notice.leaving)
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=if notice.leaving { "error-notification leaving" } else { "error-notification" }
                            role="alert"
                            on:click=move |_| board.dismiss(id)
                        >
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
