use crate::modules::reminders::adapters::outbound::subscriptions::SubscriptionRepository;
use crate::modules::reminders::core::subscription::ReminderSubscription;
use crate::shared::core::errors::RepositoryError;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySubscriptions {
    rows: RwLock<HashMap<String, ReminderSubscription>>,
    is_offline: AtomicBool,
}

impl InMemorySubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::Backend("Subscription store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SubscriptionRepository for InMemorySubscriptions {
    async fn insert(&self, subscription: ReminderSubscription) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard.contains_key(&subscription.id) {
            return Err(RepositoryError::SubscriptionExists {
                subscription_id: subscription.id,
            });
        }
        guard.insert(subscription.id.clone(), subscription);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ReminderSubscription>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn list_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ReminderSubscription>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<ReminderSubscription> = guard
            .values()
            .filter(|sub| sub.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn set_active(
        &self,
        id: &str,
        is_active: bool,
    ) -> Result<ReminderSubscription, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let Some(stored) = guard.get_mut(id) else {
            return Err(RepositoryError::SubscriptionNotFound {
                subscription_id: id.to_string(),
            });
        };
        stored.is_active = is_active;
        Ok(stored.clone())
    }

    async fn list_due(
        &self,
        sent_before: DateTime<Utc>,
    ) -> Result<Vec<ReminderSubscription>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut due: Vec<ReminderSubscription> = guard
            .values()
            .filter(|sub| sub.is_active)
            .filter(|sub| sub.last_sent.is_none_or(|sent| sent <= sent_before))
            .cloned()
            .collect();
        due.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(due)
    }

    async fn mark_sent(
        &self,
        id: &str,
        expected_last_sent: Option<DateTime<Utc>>,
        sent_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let Some(stored) = guard.get_mut(id) else {
            return Err(RepositoryError::SubscriptionNotFound {
                subscription_id: id.to_string(),
            });
        };
        let unchanged = stored.last_sent == expected_last_sent;
        let forward = stored.last_sent.is_none_or(|current| sent_at >= current);
        if !(unchanged && forward) {
            return Err(RepositoryError::StaleSubscription {
                subscription_id: id.to_string(),
            });
        }
        stored.last_sent = Some(sent_at);
        Ok(())
    }
}
