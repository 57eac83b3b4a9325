use chrono::NaiveDate;
use log::{debug, info};

use crate::model::{Task, TaskId};

/// Ordered, in-memory collection owning every task for the UI session.
/// Insertion order is display order.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore { tasks: Vec::new() }
    }

    /// Appends a new task with a fresh id and `completed = false`.
    /// Empty names, empty descriptions and past dates are all accepted.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> TaskId {
        let task = Task {
            id: TaskId::new(),
            name: name.into(),
            description: description.into(),
            due_date,
            completed: false,
        };
        let id = task.id;
        info!("event=task_added id={} due={}", id, due_date);
        self.tasks.push(task);
        id
    }

    /// Flips the completion flag of the matching task. Unknown ids are
    /// silently ignored.
    pub fn toggle_completion(&mut self, id: TaskId) {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!("event=task_toggled id={} completed={}", id, task.completed);
            }
            None => debug!("event=toggle_ignored id={}", id),
        }
    }

    /// Removes the matching task. Unknown ids are silently ignored.
    pub fn delete(&mut self, id: TaskId) {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                info!("event=task_deleted id={}", id);
            }
            None => debug!("event=delete_ignored id={}", id),
        }
    }

    /// Tasks in insertion order, for rendering.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).expect("valid date")
    }

    #[test]
    fn add_appends_in_call_order() {
        let mut store = TaskStore::new();
        store.add("a", "", due(1));
        store.add("b", "", due(2));
        store.add("c", "", due(3));

        assert_eq!(store.len(), 3);
        let names: Vec<_> = store.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn new_tasks_start_incomplete_with_distinct_ids() {
        let mut store = TaskStore::new();
        let first = store.add("a", "", due(1));
        let second = store.add("", "", due(1));

        assert_ne!(first, second);
        assert!(store.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn toggle_twice_restores_original_flag() {
        let mut store = TaskStore::new();
        let id = store.add("a", "", due(1));

        store.toggle_completion(id);
        assert!(store.tasks()[0].completed);
        store.toggle_completion(id);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn toggle_unknown_id_leaves_list_unchanged() {
        let mut store = TaskStore::new();
        store.add("a", "desc", due(1));

        store.toggle_completion(TaskId::new());

        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].name, "a");
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn delete_removes_exactly_the_matching_task() {
        let mut store = TaskStore::new();
        let a = store.add("a", "", due(1));
        store.add("b", "", due(2));

        store.delete(a);

        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].name, "b");
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut store = TaskStore::new();
        store.add("a", "", due(1));

        store.delete(TaskId::new());

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_only_touches_the_matching_task() {
        let mut store = TaskStore::new();
        let a = store.add("a", "", due(1));
        store.add("b", "", due(2));

        store.toggle_completion(a);

        assert!(store.tasks()[0].completed);
        assert!(!store.tasks()[1].completed);
    }
}
