//! UI Components
//!
//! Leptos components for the task page and shared layout.

mod delete_confirm_button;
mod filter_bar;
mod layout;
mod new_task_form;
mod task_item;
mod task_list_view;
mod theme_toggle;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use layout::Layout;
pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list_view::TaskListView;
pub use theme_toggle::ThemeToggle;
