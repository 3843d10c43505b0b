//! New Task Form Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Text input plus Add button; blank input keeps the button disabled
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (new_text, set_new_text) = signal(String::new());
    let is_blank = move || new_text.with(|t| t.trim().is_empty());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_task(&new_text.get()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" disabled=is_blank>"Add"</button>
        </form>
    }
}
