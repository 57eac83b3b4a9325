use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

/// Opaque task identifier, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        TaskId(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub completed: bool,
}

/// Medium date style for task rows, e.g. "Jan 2, 2025".
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_date_uses_medium_style_without_time() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid date");
        assert_eq!(format_due_date(date), "Jan 2, 2025");
    }

    #[test]
    fn task_ids_are_distinct() {
        assert_ne!(TaskId::new(), TaskId::new());
    }
}
