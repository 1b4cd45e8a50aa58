use crate::modules::reminders::adapters::outbound::subscriptions::SubscriptionRepository;
use crate::modules::reminders::core::subscription::ReminderSubscription;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

pub struct ListSubscriptionsHandler<TRepository>
where
    TRepository: SubscriptionRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ListSubscriptionsHandler<TRepository>
where
    TRepository: SubscriptionRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        user_id: &str,
    ) -> Result<Vec<ReminderSubscription>, ApplicationError> {
        Ok(self.repository.list_by_user(user_id).await?)
    }
}
