use crate::modules::reminders::core::subscription::ReminderSubscription;
use crate::shared::core::errors::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Adds a new subscription. An existing id is `SubscriptionExists`.
    async fn insert(&self, subscription: ReminderSubscription) -> Result<(), RepositoryError>;

    async fn get(&self, id: &str) -> Result<Option<ReminderSubscription>, RepositoryError>;

    async fn list_by_user(&self, user_id: &str)
    -> Result<Vec<ReminderSubscription>, RepositoryError>;

    /// Flips the opt-in flag and leaves `last_sent` untouched.
    async fn set_active(
        &self,
        id: &str,
        is_active: bool,
    ) -> Result<ReminderSubscription, RepositoryError>;

    /// Active subscriptions never sent, or last sent at or before `sent_before`.
    async fn list_due(
        &self,
        sent_before: DateTime<Utc>,
    ) -> Result<Vec<ReminderSubscription>, RepositoryError>;

    /// Stamps `last_sent` only if it still equals `expected_last_sent` and the
    /// new value does not move it backwards. Otherwise `StaleSubscription`.
    async fn mark_sent(
        &self,
        id: &str,
        expected_last_sent: Option<DateTime<Utc>>,
        sent_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;
}
