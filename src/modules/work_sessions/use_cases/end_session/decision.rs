use crate::modules::work_sessions::core::time_entry::TimeEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("no active work session")]
    NoActiveSession,
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted { entry: TimeEntry },
    Rejected { reason: DecideError },
}
