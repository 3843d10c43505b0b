//! Persistent Key-Value Store
//!
//! Synchronous key-value backends (browser `localStorage`, in-memory map)
//! and a JSON adapter that reads and writes one named slot at a time.
//! Failures are logged and recovered from; they never reach the UI.

#[cfg(test)]
use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors raised by a store or by slot (de)serialization
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("read failed: {0}")]
    Read(String),
    #[error("write failed: {0}")]
    Write(String),
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("malformed value in slot `{key}`: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A synchronous string-to-string store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`
///
/// Holds `None` when the browser refuses access (private mode, disabled
/// storage); every read is then absent and every write fails.
#[derive(Clone)]
pub struct BrowserStore {
    inner: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[STORE] localStorage is unavailable, state will not persist");
        }
        Self { inner }
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        match &self.inner {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{:?}", e))),
            None => Ok(None),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory store standing in for `localStorage` in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `set_item` fail, like a full quota
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.reject_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.insert_raw(key, value);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }
}

/// JSON slot adapter over a [`KeyValueStore`]
#[derive(Clone)]
pub struct PersistentStore<S> {
    store: S,
}

impl<S: KeyValueStore> PersistentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Read and decode a slot. `Ok(None)` when the slot is empty.
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let Some(raw) = self.store.get_item(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Deserialize {
                key: key.to_string(),
                source,
            })
    }

    /// Encode and store a value
    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value).map_err(StorageError::Serialize)?;
        self.store.set_item(key, &raw)
    }

    /// Read a slot, falling back to `default` when it is absent or unreadable
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                log::debug!("[STORE] slot `{}` is empty, using default", key);
                default
            }
            Err(e) => {
                log::warn!("[STORE] could not read `{}`: {}, using default", key, e);
                default
            }
        }
    }

    /// Write a slot. Failures are logged; in-memory state stays authoritative.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_write(key, value) {
            log::warn!("[STORE] could not write `{}`: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use proptest::prelude::*;

    #[test]
    fn test_read_missing_slot_returns_default() {
        let store = PersistentStore::new(MemoryStore::new());
        let tasks: Vec<Task> = store.read("tasks", Vec::new());
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_read_malformed_slot_returns_default() {
        let memory = MemoryStore::new();
        memory.insert_raw("tasks", "{not json");
        let store = PersistentStore::new(memory);

        let tasks: Vec<Task> = store.read("tasks", vec![Task::new(7, "fallback")]);
        assert_eq!(tasks, vec![Task::new(7, "fallback")]);

        let err = store.try_read::<Vec<Task>>("tasks").unwrap_err();
        assert!(matches!(err, StorageError::Deserialize { ref key, .. } if key == "tasks"));
    }

    #[test]
    fn test_write_then_read() {
        let store = PersistentStore::new(MemoryStore::new());
        let tasks = vec![Task::new(1, "a"), Task::new(2, "b")];
        store.write("tasks", &tasks);

        assert_eq!(store.read::<Vec<Task>>("tasks", Vec::new()), tasks);
        assert_eq!(
            store.inner().raw("tasks").as_deref(),
            Some(r#"[{"id":1,"text":"a","completed":false},{"id":2,"text":"b","completed":false}]"#)
        );
    }

    #[test]
    fn test_rejected_write_is_swallowed() {
        let memory = MemoryStore::new();
        memory.insert_raw("theme", "\"dark\"");
        memory.reject_writes(true);
        let store = PersistentStore::new(memory);

        store.write("theme", "light");
        assert!(store.try_write("theme", "light").is_err());
        assert_eq!(store.inner().raw("theme").as_deref(), Some("\"dark\""));
    }

    proptest! {
        #[test]
        fn prop_task_list_survives_write_and_read(
            raw in proptest::collection::vec((any::<u64>(), ".*", any::<bool>()), 0..12),
        ) {
            let tasks: Vec<Task> = raw
                .into_iter()
                .map(|(id, text, completed)| Task { id, text, completed })
                .collect();
            let store = PersistentStore::new(MemoryStore::new());

            store.write("tasks", &tasks);

            prop_assert_eq!(store.try_read::<Vec<Task>>("tasks").unwrap(), Some(tasks));
        }
    }
}
