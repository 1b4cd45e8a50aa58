// Shared test fixture for Task values.

use crate::modules::tasks::core::task::{Priority, Task};
use chrono::{DateTime, TimeZone, Utc};

pub struct TaskBuilder {
    inner: Task,
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TaskBuilder {
    pub fn new() -> Self {
        Self {
            inner: Task {
                id: "task-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                title: "Review pull requests".to_string(),
                description: None,
                priority: Priority::Medium,
                due_date: None,
                completed: false,
                assigned_to: None,
                created_at: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn assigned_to(mut self, v: impl Into<String>) -> Self {
        self.inner.assigned_to = Some(v.into());
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn completed(mut self) -> Self {
        self.inner.completed = true;
        self
    }

    pub fn build(self) -> Task {
        self.inner
    }
}
