//! Theme State Container
//!
//! Two-state light/dark flag. The initial theme comes from the stored slot,
//! then the system preference, then `Light`. Each transition is persisted
//! before subscribers are told.

use crate::models::Theme;
use crate::observer::{Listeners, SubscriptionId};
use crate::storage::{KeyValueStore, PersistentStore};

pub struct ThemeState<S> {
    theme: Theme,
    store: PersistentStore<S>,
    key: String,
    listeners: Listeners<Theme>,
}

impl<S: KeyValueStore> ThemeState<S> {
    pub fn initialize(store: S, key: impl Into<String>, system_prefers_dark: Option<bool>) -> Self {
        let key = key.into();
        let store = PersistentStore::new(store);
        let fallback = match system_prefers_dark {
            Some(true) => Theme::Dark,
            _ => Theme::Light,
        };
        let theme = store.read(&key, fallback);
        log::info!("[THEME] Initial theme: {}", theme.as_str());
        Self {
            theme,
            store,
            key,
            listeners: Listeners::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        log::debug!("[THEME] Switched to {}", theme.as_str());
        self.store.write(&self.key, &self.theme);
        self.listeners.notify(&self.theme);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Theme) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

/// Whether the browser reports `prefers-color-scheme: dark`.
/// `None` when the media query cannot be evaluated.
pub fn system_prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media("(prefers-color-scheme: dark)").ok().flatten()?;
    Some(query.matches())
}

/// Set `data-theme` on the `<html>` element
pub fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
        log::warn!("[THEME] Could not set data-theme: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    const KEY: &str = "theme";

    #[test]
    fn test_stored_value_wins() {
        let store = MemoryStore::new();
        store.insert_raw(KEY, "\"light\"");

        let state = ThemeState::initialize(&store, KEY, Some(true));
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_system_preference_used_when_unset() {
        let store = MemoryStore::new();
        assert_eq!(ThemeState::initialize(&store, KEY, Some(true)).theme(), Theme::Dark);
        assert_eq!(ThemeState::initialize(&store, KEY, Some(false)).theme(), Theme::Light);
        assert_eq!(ThemeState::initialize(&store, KEY, None).theme(), Theme::Light);
    }

    #[test]
    fn test_corrupt_value_falls_back_to_system() {
        let store = MemoryStore::new();
        store.insert_raw(KEY, "\"purple\"");

        let state = ThemeState::initialize(&store, KEY, Some(true));
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_and_notifies() {
        let store = MemoryStore::new();
        let mut state = ThemeState::initialize(&store, KEY, Some(true));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        state.subscribe(move |theme| sink.borrow_mut().push(*theme));

        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(store.raw(KEY).as_deref(), Some("\"light\""));
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(store.raw(KEY).as_deref(), Some("\"dark\""));

        assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);
    }
}
