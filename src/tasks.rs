//! Task List State Container
//!
//! Owns the canonical task list. Every successful mutation writes the whole
//! list to its storage slot and then notifies subscribers with a snapshot.
//! Operations on unknown ids and blank text are silent no-ops.

use std::collections::HashSet;

use crate::models::{FilterMode, Task};
use crate::observer::{Listeners, SubscriptionId};
use crate::storage::{KeyValueStore, PersistentStore};

/// Source of the timestamps used for task ids
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall clock (`Date.now()` in the browser)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}

/// Footer numbers for the whole list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
}

pub struct TaskList<S, C = SystemClock> {
    tasks: Vec<Task>,
    store: PersistentStore<S>,
    key: String,
    clock: C,
    listeners: Listeners<[Task]>,
}

impl<S: KeyValueStore> TaskList<S> {
    /// Hydrate from the `key` slot, empty if absent or corrupt
    pub fn initialize(store: S, key: impl Into<String>) -> Self {
        Self::with_clock(store, key, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TaskList<S, C> {
    pub fn with_clock(store: S, key: impl Into<String>, clock: C) -> Self {
        let key = key.into();
        let store = PersistentStore::new(store);
        let loaded: Vec<Task> = store.read(&key, Vec::new());
        let (tasks, renumbered) = dedupe_ids(loaded, clock.now_millis());
        log::info!("[TASKS] Loaded {} tasks from `{}`", tasks.len(), key);
        if renumbered > 0 {
            log::warn!("[TASKS] Renumbered {} tasks with duplicate ids in `{}`", renumbered, key);
            store.write(&key, &tasks);
        }
        Self {
            tasks,
            store,
            key,
            clock,
            listeners: Listeners::default(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks not yet completed
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|t| FilterMode::Active.matches(t)).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.remaining_count()
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts {
            total: self.len(),
            remaining: self.remaining_count(),
            completed: self.completed_count(),
        }
    }

    /// Append a new task. Returns its id, or `None` if `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.tasks.push(Task::new(id, text));
        log::debug!("[TASKS] Added task {}", id);
        self.commit();
        Some(id)
    }

    /// Flip `completed` on the task with `id`
    pub fn toggle(&mut self, id: u64) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        log::debug!("[TASKS] Toggled task {} -> {}", id, task.completed);
        self.commit();
        true
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        log::debug!("[TASKS] Deleted task {}", id);
        self.commit();
        true
    }

    /// Replace the text of a task; blank text leaves it unchanged
    pub fn edit(&mut self, id: u64, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if task.text == text {
            return false;
        }
        task.text = text.to_string();
        log::debug!("[TASKS] Edited task {}", id);
        self.commit();
        true
    }

    /// Register a listener called with the full list after each mutation
    pub fn subscribe(&mut self, listener: impl FnMut(&[Task]) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn next_id(&self) -> u64 {
        let taken: HashSet<u64> = self.tasks.iter().map(|t| t.id).collect();
        fresh_id(&taken, self.clock.now_millis())
    }

    fn commit(&mut self) {
        self.store.write(&self.key, &self.tasks);
        self.listeners.notify(&self.tasks);
    }
}

/// Timestamp id, bumped past the newest taken id on collision. When that
/// would overflow, the smallest free id is used instead.
fn fresh_id(taken: &HashSet<u64>, now: u64) -> u64 {
    match taken.iter().max() {
        Some(&max) if now <= max => max
            .checked_add(1)
            .or_else(|| (0..=u64::MAX).find(|id| !taken.contains(id)))
            .unwrap_or(now),
        _ => now,
    }
}

/// Give every task after the first holder of an id a fresh one
fn dedupe_ids(mut tasks: Vec<Task>, now: u64) -> (Vec<Task>, usize) {
    let mut taken: HashSet<u64> = tasks.iter().map(|t| t.id).collect();
    let mut seen = HashSet::new();
    let mut renumbered = 0;
    for task in tasks.iter_mut() {
        if !seen.insert(task.id) {
            task.id = fresh_id(&taken, now);
            taken.insert(task.id);
            seen.insert(task.id);
            renumbered += 1;
        }
    }
    (tasks, renumbered)
}
