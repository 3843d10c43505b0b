//! Task Item Component
//!
//! One row of the task list: checkbox, text (double-click to edit), delete.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Task;

/// Inline editor state for one row
#[derive(Debug, Clone, PartialEq)]
pub struct InlineEdit {
    original: String,
    draft: String,
    open: bool,
}

impl InlineEdit {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            draft: original.clone(),
            original,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Open the editor on a fresh copy of the original text
    pub fn begin(&mut self) {
        self.draft = self.original.clone();
        self.open = true;
    }

    pub fn set_draft(&mut self, draft: String) {
        if self.open {
            self.draft = draft;
        }
    }

    /// Close without saving and drop the draft
    pub fn cancel(&mut self) {
        self.draft = self.original.clone();
        self.open = false;
    }

    /// Close the editor, returning the text to save. `None` if it was
    /// already closed, so a late blur after Enter or Escape saves nothing.
    pub fn finish(&mut self) -> Option<String> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(std::mem::replace(&mut self.draft, self.original.clone()))
    }
}

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let id = task.id;
    let completed = task.completed;
    let text = task.text;
    let edit = RwSignal::new(InlineEdit::new(text.clone()));

    // Blank drafts are rejected by the container
    let commit_edit = move || {
        if let Some(draft) = edit.try_update(|e| e.finish()).flatten() {
            ctx.edit_task(id, &draft);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => commit_edit(),
        "Escape" => edit.update(|e| e.cancel()),
        _ => {}
    };

    view! {
        <li class=if completed { "task-row completed" } else { "task-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| ctx.toggle_task(id)
            />
            <Show
                when=move || edit.with(|e| e.is_open())
                fallback=move || {
                    let label = text.clone();
                    view! {
                        <span
                            class="task-text"
                            on:dblclick=move |_| edit.update(|e| e.begin())
                        >
                            {label}
                        </span>
                    }
                }
            >
                <input
                    type="text"
                    class="task-edit"
                    prop:value=move || edit.with(|e| e.draft().to_string())
                    on:input=move |ev| edit.update(|e| e.set_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                    on:blur=move |_| commit_edit()
                />
            </Show>
            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=move |_| ctx.delete_task(id)
            />
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_then_blur_saves_nothing() {
        let mut edit = InlineEdit::new("Buy milk");
        edit.begin();
        edit.set_draft("Buy oat milk".to_string());

        edit.cancel();
        // Removing the focused input fires blur after Escape
        assert_eq!(edit.finish(), None);
        assert_eq!(edit.draft(), "Buy milk");
        assert!(!edit.is_open());
    }

    #[test]
    fn test_enter_then_blur_saves_once() {
        let mut edit = InlineEdit::new("Buy milk");
        edit.begin();
        edit.set_draft("Buy bread".to_string());

        assert_eq!(edit.finish().as_deref(), Some("Buy bread"));
        assert_eq!(edit.finish(), None);
    }

    #[test]
    fn test_begin_discards_stale_draft() {
        let mut edit = InlineEdit::new("a");
        edit.set_draft("ignored while closed".to_string());
        edit.begin();
        assert_eq!(edit.draft(), "a");
        assert!(edit.is_open());
    }
}
