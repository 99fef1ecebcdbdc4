//! Summary Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::store_summary;

/// Total and completed counts
#[component]
pub fn SummaryBar() -> impl IntoView {
    let store = use_app_context().store;
    let summary = Memo::new(move |_| store_summary(&store));

    view! {
        <div class="stats">
            <div class="stat">
                <span class="stat-number">{move || summary.get().total}</span>
                <span class="stat-label">"Total"</span>
            </div>
            <div class="stat">
                <span class="stat-number">{move || summary.get().completed}</span>
                <span class="stat-label">"Completed"</span>
            </div>
        </div>
    }
}
