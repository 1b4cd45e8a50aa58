#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{0:?} is not an email address")]
    InvalidEmail(String),
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted { user_id: String, email: String },
    Rejected { reason: DecideError },
}
