use crate::shared::core::errors::RepositoryError;
use async_trait::async_trait;

/// Resolves the address reminders for a user are sent to.
#[async_trait]
pub trait RecipientDirectory: Send + Sync {
    /// Sets or replaces the user's address.
    async fn register(&self, user_id: &str, email: &str) -> Result<(), RepositoryError>;

    async fn email_for(&self, user_id: &str) -> Result<Option<String>, RepositoryError>;
}
