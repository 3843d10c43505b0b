//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Header button switching between light and dark
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_ui_store();
    let is_dark = move || store.theme().get().is_dark();

    view! {
        <button
            class="theme-toggle"
            title=move || if is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
            on:click=move |_| {
                ctx.toggle_theme();
            }
        >
            {move || if is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
