//! Task List
//!
//! Ordered in-memory mirror of the server's tasks, keyed by id.

use std::collections::HashMap;

use crate::models::{Task, TaskId};

/// Derived counts shown in the summary bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
}

/// Handle for an in-flight toggle; tickets are issued in increasing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Local task cache
///
/// Entries are unique by id. Newly created tasks go to the front, matching
/// the server's newest-first ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_ticket: u64,
    /// Highest ticket whose response has been applied, per task
    applied: HashMap<TaskId, u64>,
}

impl TaskList {
    #[cfg(test)]
    pub fn new(tasks: Vec<Task>) -> Self {
        let mut list = Self::default();
        list.replace_all(tasks);
        list
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Replace the whole list with a fresh server snapshot
    ///
    /// Duplicate ids in the snapshot keep their first occurrence.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        let mut unique: Vec<Task> = Vec::with_capacity(tasks.len());
        for task in tasks {
            if !unique.iter().any(|t| t.id == task.id) {
                unique.push(task);
            }
        }
        self.tasks = unique;
    }

    /// Prepend a created task, or replace it in place if already present
    pub fn insert_front(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.insert(0, task),
        }
    }

    /// Replace the entry with the same id; returns false if it is gone
    pub fn replace(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                *existing = task;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| &t.id == id)?;
        self.applied.remove(id);
        Some(self.tasks.remove(index))
    }

    /// Issue a ticket for a toggle request about to be sent
    pub fn begin_toggle(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// Apply a successful toggle response
    ///
    /// Dropped if a response to a later request for the same task was already
    /// applied, or if the task is no longer in the list.
    pub fn finish_toggle(&mut self, ticket: Ticket, task: Task) -> bool {
        if self.applied.get(&task.id).is_some_and(|&last| last > ticket.0) {
            return false;
        }
        let id = task.id.clone();
        if !self.replace(task) {
            return false;
        }
        self.applied.insert(id, ticket.0);
        true
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|t| t.completed).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, completed: bool) -> Task {
        Task {
            id: TaskId::from(id),
            title: format!("Task {}", id),
            completed,
        }
    }

    #[test]
    fn test_replace_all_drops_duplicates() {
        let list = TaskList::new(vec![
            make_task("1", false),
            make_task("2", true),
            make_task("1", true),
        ]);

        assert_eq!(list.len(), 2);
        assert!(!list.get(&TaskId::from("1")).unwrap().completed);
    }

    #[test]
    fn test_insert_front_prepends_or_replaces() {
        let mut list = TaskList::new(vec![make_task("1", false)]);

        list.insert_front(make_task("2", false));
        assert_eq!(list.tasks()[0].id, TaskId::from("2"));

        list.insert_front(make_task("1", true));
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[1], make_task("1", true));
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut list = TaskList::new(vec![make_task("1", false)]);
        assert!(!list.replace(make_task("9", true)));
        assert_eq!(list.tasks(), &[make_task("1", false)]);
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut list = TaskList::new(vec![make_task("1", false), make_task("2", false)]);

        let removed = list.remove(&TaskId::from("1"));
        assert_eq!(removed, Some(make_task("1", false)));
        assert_eq!(list.tasks(), &[make_task("2", false)]);
        assert_eq!(list.remove(&TaskId::from("1")), None);
    }

    #[test]
    fn test_stale_toggle_is_dropped() {
        let mut list = TaskList::new(vec![make_task("1", false)]);
        let id = TaskId::from("1");

        let first = list.begin_toggle();
        let second = list.begin_toggle();

        // Second request's response lands first
        assert!(list.finish_toggle(second, make_task("1", false)));
        assert!(!list.finish_toggle(first, make_task("1", true)));
        assert!(!list.get(&id).unwrap().completed);
    }

    #[test]
    fn test_older_success_applies_when_newer_request_fails() {
        let mut list = TaskList::new(vec![make_task("1", false)]);

        let first = list.begin_toggle();
        let _second = list.begin_toggle();

        // Second request never answers successfully
        assert!(list.finish_toggle(first, make_task("1", true)));
        assert!(list.get(&TaskId::from("1")).unwrap().completed);
    }

    #[test]
    fn test_in_order_responses_both_apply() {
        let mut list = TaskList::new(vec![make_task("1", false)]);

        let first = list.begin_toggle();
        let second = list.begin_toggle();

        assert!(list.finish_toggle(first, make_task("1", true)));
        assert!(list.finish_toggle(second, make_task("1", false)));
        assert!(!list.get(&TaskId::from("1")).unwrap().completed);
    }

    #[test]
    fn test_toggle_after_delete_does_not_resurrect() {
        let mut list = TaskList::new(vec![make_task("1", false)]);
        let id = TaskId::from("1");

        let ticket = list.begin_toggle();
        list.remove(&id);

        assert!(!list.finish_toggle(ticket, make_task("1", true)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let list = TaskList::new(vec![
            make_task("1", true),
            make_task("2", false),
            make_task("3", true),
        ]);
        assert_eq!(list.summary(), Summary { total: 3, completed: 2 });
        assert_eq!(TaskList::default().summary(), Summary::default());
    }
}
