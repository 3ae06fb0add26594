//! Task list kept for the user during a session.

mod item;

pub use item::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered task storage with case-insensitive title lookup.
///
/// Titles are not required to be unique; lookups act on the first match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskStore {
    tasks: Vec<TaskItem>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task and return its id.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        reminder_date: Option<NaiveDate>,
    ) -> TaskId {
        let task = TaskItem::new(title, description).with_reminder(reminder_date);
        let id = task.id;
        debug!(%id, title = %task.title, "task added");
        self.tasks.push(task);
        id
    }

    /// Copy of every task in insertion order.
    pub fn list_all(&self) -> Vec<TaskItem> {
        self.tasks.clone()
    }

    /// First task whose title matches, ignoring case.
    pub fn get(&self, title: &str) -> Option<&TaskItem> {
        self.tasks.iter().find(|t| t.title_matches(title))
    }

    /// Mark the first matching task completed. Returns false if none matched.
    pub fn mark_completed(&mut self, title: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.title_matches(title)) {
            Some(task) => {
                task.completed = true;
                debug!(id = %task.id, "task completed");
                true
            }
            None => false,
        }
    }

    /// Remove the first task with a matching title. Returns false if none matched.
    pub fn delete(&mut self, title: &str) -> bool {
        match self.tasks.iter().position(|t| t.title_matches(title)) {
            Some(index) => {
                let task = self.tasks.remove(index);
                debug!(id = %task.id, "task deleted");
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
