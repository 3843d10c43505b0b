//! Layout Component
//!
//! Shared page shell: title bar with the theme toggle, then page content.

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn Layout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class=move || format!("app-layout theme-{}", store.theme().get().as_str())>
            <header class="title-bar">
                <span class="title-bar-title">{title}</span>
                <ThemeToggle />
            </header>
            <main class="main-content">
                {children()}
            </main>
        </div>
    }
}
