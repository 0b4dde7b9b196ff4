//! Dashboard task-list state.
//!
//! DESIGN
//! ======
//! The list is rebuilt from the server response on every fetch. There is no
//! local insertion on create; the create flow re-fetches instead.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::Task;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskListState {
    pub items: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TaskListState {
    /// Drop whatever was shown and show `items` in server order.
    pub fn replace(&mut self, items: Vec<Task>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. Previously shown items stay.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|task| task.task_description.as_str())
    }
}
