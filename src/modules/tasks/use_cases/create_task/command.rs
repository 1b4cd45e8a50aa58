use crate::modules::tasks::core::task::TaskDetails;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub task_id: String,
    pub user_id: String,
    pub details: TaskDetails,
    pub created_at: DateTime<Utc>,
}
