//! Filter Selector
//!
//! Derives the visible task list from the full list and the active filter.

use crate::models::{FilterMode, Task};

/// Tasks matching `mode`, in their original order
pub fn filter_tasks(tasks: &[Task], mode: FilterMode) -> Vec<Task> {
    tasks.iter().filter(|t| mode.matches(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_task(id: u64, completed: bool) -> Task {
        Task {
            id,
            text: format!("Task {}", id),
            completed,
        }
    }

    #[test]
    fn test_filter_modes() {
        let tasks = vec![
            make_task(1, false),
            make_task(2, true),
            make_task(3, false),
            make_task(4, true),
        ];

        assert_eq!(filter_tasks(&tasks, FilterMode::All), tasks);

        let active: Vec<u64> = filter_tasks(&tasks, FilterMode::Active).iter().map(|t| t.id).collect();
        assert_eq!(active, vec![1, 3]);

        let completed: Vec<u64> = filter_tasks(&tasks, FilterMode::Completed).iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![2, 4]);
    }

    #[test]
    fn test_filter_empty_list() {
        for mode in FilterMode::ALL {
            assert!(filter_tasks(&[], mode).is_empty());
        }
    }

    proptest! {
        #[test]
        fn prop_active_and_completed_partition_list(flags in proptest::collection::vec(any::<bool>(), 0..20)) {
            let tasks: Vec<Task> = flags.iter().enumerate()
                .map(|(i, done)| make_task(i as u64, *done))
                .collect();

            let active = filter_tasks(&tasks, FilterMode::Active);
            let completed = filter_tasks(&tasks, FilterMode::Completed);
            prop_assert_eq!(active.len() + completed.len(), tasks.len());

            // Merge back by original position
            let mut merged: Vec<Task> = active.into_iter().chain(completed).collect();
            merged.sort_by_key(|t| t.id);
            prop_assert_eq!(&merged, &tasks);
            prop_assert_eq!(filter_tasks(&tasks, FilterMode::All), tasks);
        }
    }
}
