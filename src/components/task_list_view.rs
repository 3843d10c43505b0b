//! Task List View Component
//!
//! Filtered task rows plus a footer with remaining and completed counts.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::AppContext;
use crate::store::{use_ui_store, visible_tasks, UiStateStoreFields};

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_ui_store();
    let visible = visible_tasks(store);
    // Recount whenever a new snapshot lands in the store
    let counts = Memo::new(move |_| {
        store.tasks().track();
        ctx.task_counts()
    });
    let total = move || counts.get().total;

    view! {
        <Show
            when=move || !visible.get().is_empty()
            fallback=move || view! {
                <p class="empty-list">
                    {move || if total() == 0 { "Nothing to do yet." } else { "No tasks match this filter." }}
                </p>
            }
        >
            <ul class="task-list">
                <For
                    each=move || visible.get()
                    // Re-render a row whenever its content changes
                    key=|task| (task.id, task.completed, task.text.clone())
                    children=move |task| view! { <TaskItem task=task /> }
                />
            </ul>
        </Show>
        <p class="task-count">
            {move || {
                let counts = counts.get();
                format!(
                    "{} {} left, {} completed",
                    counts.remaining,
                    if counts.remaining == 1 { "item" } else { "items" },
                    counts.completed,
                )
            }}
        </p>
    }
}
