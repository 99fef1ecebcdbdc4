//! List Projection
//!
//! Pure mapping from the task list to what the list area should show.
//! Titles stay raw here; the view inserts them as text nodes, so markup in a
//! title is displayed literally and never parsed.

use crate::models::{Task, TaskId};
use crate::task_list::TaskList;

/// What the list area displays
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Initial fetch in flight (placeholder hidden)
    Loading,
    /// No tasks: placeholder shown, list container hidden
    Empty,
    Rows(Vec<TaskRow>),
}

/// One rendered task row
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            completed: task.completed,
        }
    }

    pub fn checkbox_class(&self) -> &'static str {
        if self.completed { "task-checkbox checked" } else { "task-checkbox" }
    }

    pub fn content_class(&self) -> &'static str {
        if self.completed { "task-content completed" } else { "task-content" }
    }

    pub fn checkbox_label(&self) -> &'static str {
        if self.completed { "Mark as incomplete" } else { "Mark as complete" }
    }
}

pub fn project(tasks: &TaskList, loading: bool) -> ListView {
    if tasks.is_empty() {
        return if loading { ListView::Loading } else { ListView::Empty };
    }
    ListView::Rows(tasks.tasks().iter().map(TaskRow::from_task).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, title: &str, completed: bool) -> Task {
        Task {
            id: TaskId::from(id),
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        assert_eq!(project(&TaskList::default(), false), ListView::Empty);
        assert_eq!(project(&TaskList::default(), true), ListView::Loading);
    }

    #[test]
    fn test_rows_keep_order_and_raw_title() {
        let list = TaskList::new(vec![
            make_task("2", "<b>bold</b>", false),
            make_task("1", "A", true),
        ]);

        let ListView::Rows(rows) = project(&list, false) else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, TaskId::from("2"));
        assert_eq!(rows[0].title, "<b>bold</b>");
        assert_eq!(rows[1].id, TaskId::from("1"));
    }

    #[test]
    fn test_row_presentation_follows_completed() {
        let done = TaskRow::from_task(&make_task("1", "A", true));
        assert_eq!(done.checkbox_class(), "task-checkbox checked");
        assert_eq!(done.content_class(), "task-content completed");
        assert_eq!(done.checkbox_label(), "Mark as incomplete");

        let open = TaskRow::from_task(&make_task("2", "B", false));
        assert_eq!(open.checkbox_class(), "task-checkbox");
        assert_eq!(open.content_class(), "task-content");
        assert_eq!(open.checkbox_label(), "Mark as complete");
    }

    #[test]
    fn test_loading_flag_ignored_once_tasks_exist() {
        let list = TaskList::new(vec![make_task("1", "A", false)]);
        assert!(matches!(project(&list, true), ListView::Rows(_)));
    }
}
