#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("task not found")]
    NotFound,
    #[error("only the creator may delete a task")]
    NotCreator,
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted { task_id: String },
    Rejected { reason: DecideError },
}
