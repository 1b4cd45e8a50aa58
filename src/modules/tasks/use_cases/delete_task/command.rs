#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTask {
    pub task_id: String,
    pub user_id: String,
}
