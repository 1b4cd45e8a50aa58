#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleTask {
    pub task_id: String,
    pub user_id: String,
}
