//! Filter Bar Component
//!
//! All / Active / Completed selector buttons.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::FilterMode;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_ui_store();

    view! {
        <div class="filter-bar">
            {FilterMode::ALL.iter().map(|mode| {
                let mode = *mode;
                let is_selected = move || store.filter().get() == mode;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ctx.set_filter(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
