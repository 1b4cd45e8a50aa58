use crate::modules::tasks::core::task::Task;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("task not found")]
    NotFound,
    #[error("only the creator may edit a task")]
    NotCreator,
    #[error("task title must not be empty")]
    EmptyTitle,
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted { task: Task },
    Rejected { reason: DecideError },
}
