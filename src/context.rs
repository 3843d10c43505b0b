//! Application Context
//!
//! Explicitly constructed owner of the task and theme containers, provided
//! to components via Leptos context. Components call its methods; they never
//! touch the containers or the UI store directly.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::{FilterMode, Theme};
use crate::storage::BrowserStore;
use crate::store::{UiStateStoreFields, UiStore};
use crate::tasks::{TaskCounts, TaskList};
use crate::theme::{apply_to_document, system_prefers_dark, ThemeState};

#[derive(Clone, Copy)]
pub struct AppContext {
    tasks: StoredValue<TaskList<BrowserStore>, LocalStorage>,
    theme: StoredValue<ThemeState<BrowserStore>, LocalStorage>,
    store: UiStore,
}

impl AppContext {
    /// Hydrate both containers and wire their listeners to `store`
    pub fn new(config: &AppConfig, store: UiStore) -> Self {
        let backend = BrowserStore::local();
        let mut tasks = TaskList::initialize(backend.clone(), config.tasks_key.clone());
        let mut theme = ThemeState::initialize(backend, config.theme_key.clone(), system_prefers_dark());

        *store.tasks().write() = tasks.tasks().to_vec();
        *store.theme().write() = theme.theme();
        apply_to_document(theme.theme());

        let tasks_sub = tasks.subscribe(move |snapshot| {
            *store.tasks().write() = snapshot.to_vec();
        });
        let theme_sub = theme.subscribe(move |theme| {
            *store.theme().write() = *theme;
            apply_to_document(*theme);
        });

        let tasks = StoredValue::new_local(tasks);
        let theme = StoredValue::new_local(theme);

        // Detach from the UI store when the app owner is torn down
        on_cleanup(move || {
            tasks.try_update_value(|list| list.unsubscribe(tasks_sub));
            theme.try_update_value(|state| state.unsubscribe(theme_sub));
        });

        Self { tasks, theme, store }
    }

    /// Total / remaining / completed, as computed by the container
    pub fn task_counts(&self) -> TaskCounts {
        self.tasks.try_with_value(|list| list.counts()).unwrap_or_default()
    }

    /// Returns true if a task was created
    pub fn add_task(&self, text: &str) -> bool {
        self.tasks
            .try_update_value(|list| list.add(text))
            .flatten()
            .is_some()
    }

    pub fn toggle_task(&self, id: u64) {
        self.tasks.update_value(|list| {
            list.toggle(id);
        });
    }

    pub fn delete_task(&self, id: u64) {
        self.tasks.update_value(|list| {
            list.delete(id);
        });
    }

    pub fn edit_task(&self, id: u64, text: &str) -> bool {
        self.tasks
            .try_update_value(|list| list.edit(id, text))
            .unwrap_or(false)
    }

    pub fn set_filter(&self, mode: FilterMode) {
        *self.store.filter().write() = mode;
    }

    pub fn toggle_theme(&self) -> Theme {
        self.theme
            .try_update_value(|state| state.toggle())
            .unwrap_or_default()
    }
}
