use crate::shared::infrastructure::email::EmailError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("user {user_id} already has an active time entry")]
    ActiveSessionExists { user_id: String },

    #[error("time entry {time_entry_id} is not open")]
    EntryNotOpen { time_entry_id: String },

    #[error("reminder subscription {subscription_id} changed since it was read")]
    StaleSubscription { subscription_id: String },

    #[error("reminder subscription {subscription_id} already exists")]
    SubscriptionExists { subscription_id: String },

    #[error("reminder subscription {subscription_id} not found")]
    SubscriptionNotFound { subscription_id: String },

    #[error("task {task_id} not found")]
    TaskNotFound { task_id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("a work session is already active for user {user_id}")]
    AlreadyActive { user_id: String },

    #[error("no active work session for user {user_id}")]
    NoActiveSession { user_id: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("task {task_id} not found")]
    TaskNotFound { task_id: String },

    #[error("user {user_id} may not change task {task_id}")]
    NotPermitted { user_id: String, task_id: String },

    #[error("storage unavailable: {0}")]
    StorageUnavailable(RepositoryError),

    #[error("email delivery failed: {0}")]
    EmailDeliveryFailed(#[from] EmailError),
}

impl From<RepositoryError> for ApplicationError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::ActiveSessionExists { user_id } => Self::AlreadyActive { user_id },
            RepositoryError::TaskNotFound { task_id } => Self::TaskNotFound { task_id },
            other => Self::StorageUnavailable(other),
        }
    }
}
