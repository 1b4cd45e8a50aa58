use crate::modules::tasks::core::task::Task;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("task not found")]
    NotFound,
    #[error("only the creator or the assignee may complete a task")]
    NotInvolved,
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted { task: Task },
    Rejected { reason: DecideError },
}
