//! UI State Store
//!
//! Render-side snapshot of the containers, using reactive_stores for
//! field-level reactivity. Only container listeners write to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::filter_tasks;
use crate::models::{FilterMode, Task, Theme};

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Latest task list snapshot
    pub tasks: Vec<Task>,
    /// Active filter (not persisted)
    pub filter: FilterMode,
    pub theme: Theme,
}

pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Tasks visible under the active filter
pub fn visible_tasks(store: UiStore) -> Memo<Vec<Task>> {
    Memo::new(move |_| {
        let mode = store.filter().get();
        filter_tasks(&store.tasks().read(), mode)
    })
}
