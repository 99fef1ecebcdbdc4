//! UI Components
//!
//! Leptos components bound to the task controller.

mod new_task_form;
mod notice_stack;
mod summary_bar;
mod task_item;
mod task_list_view;

pub use new_task_form::NewTaskForm;
pub use notice_stack::NoticeStack;
pub use summary_bar::SummaryBar;
pub use task_item::TaskItem;
pub use task_list_view::TaskListView;
