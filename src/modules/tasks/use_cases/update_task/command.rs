use crate::modules::tasks::core::task::TaskDetails;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTask {
    pub task_id: String,
    pub user_id: String,
    pub details: TaskDetails,
}
