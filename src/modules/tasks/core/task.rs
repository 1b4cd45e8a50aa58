use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A to-do item owned by its creator and optionally assigned to a teammate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    /// Creator.
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn is_created_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Creator or assignee.
    pub fn is_visible_to(&self, user_id: &str) -> bool {
        self.is_created_by(user_id) || self.assigned_to.as_deref() == Some(user_id)
    }
}

/// The editable part of a task, as supplied on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDetails {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
}

impl TaskDetails {
    /// Trims the title and drops blank optional text. `None` when the title
    /// is blank.
    pub fn normalized(self) -> Option<Self> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            description: present(self.description),
            assigned_to: present(self.assigned_to),
            ..self
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
