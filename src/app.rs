//! Tidy Frontend App
//!
//! Builds the UI store and the application context, then lays out the
//! task page inside the shared layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, Layout, NewTaskForm, TaskListView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::UiState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(UiState::default());
    provide_context(store);
    provide_context(AppContext::new(&config, store));

    view! {
        <Layout title="Tidy">
            <NewTaskForm />
            <FilterBar />
            <TaskListView />
        </Layout>
    }
}
