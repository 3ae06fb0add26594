//! Task record definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Create a new random task ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: TaskId,
    pub title: String,
    /// May be empty.
    pub description: String,
    pub reminder_date: Option<NaiveDate>,
    pub completed: bool,
}

impl TaskItem {
    /// Create a pending task.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            reminder_date: None,
            completed: false,
        }
    }

    /// Set the reminder date.
    pub fn with_reminder(mut self, date: Option<NaiveDate>) -> Self {
        self.reminder_date = date;
        self
    }

    /// Case-insensitive title comparison.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    pub fn status_tag(&self) -> &'static str {
        if self.completed {
            "[COMPLETED]"
        } else {
            "[PENDING]"
        }
    }
}

impl std::fmt::Display for TaskItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status_tag(), self.title)?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        if let Some(date) = self.reminder_date {
            write!(f, " (Remind: {})", date.format("%Y-%m-%d"))?;
        }
        Ok(())
    }
}
