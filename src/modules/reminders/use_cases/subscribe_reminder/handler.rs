use crate::modules::reminders::adapters::outbound::subscriptions::SubscriptionRepository;
use crate::modules::reminders::core::subscription::{ReminderSubscription, ReminderType};
use crate::modules::reminders::use_cases::subscribe_reminder::command::SubscribeReminder;
use crate::modules::reminders::use_cases::subscribe_reminder::decide::decide_subscribe;
use crate::modules::reminders::use_cases::subscribe_reminder::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Subscribed {
    pub subscription: ReminderSubscription,
    pub created: bool,
}

pub struct SubscribeReminderHandler<TRepository>
where
    TRepository: SubscriptionRepository + 'static,
{
    repository: Arc<TRepository>,
    user_locks: KeyedLocks,
}

impl<TRepository> SubscribeReminderHandler<TRepository>
where
    TRepository: SubscriptionRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self {
            repository,
            user_locks: KeyedLocks::new(),
        }
    }

    pub async fn handle(
        &self,
        user_id: &str,
        reminder_type: ReminderType,
        is_active: bool,
    ) -> Result<Subscribed, ApplicationError> {
        let _guard = self.user_locks.lock(user_id).await;

        let existing = self.repository.list_by_user(user_id).await?;
        let command = SubscribeReminder {
            subscription_id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            reminder_type,
            is_active,
        };

        match decide_subscribe(&existing, command) {
            Decision::Create { subscription } => {
                self.repository.insert(subscription.clone()).await?;
                tracing::info!(
                    user_id,
                    subscription_id = %subscription.id,
                    reminder_type = reminder_type.as_str(),
                    "reminder subscription created"
                );
                Ok(Subscribed {
                    subscription,
                    created: true,
                })
            }
            Decision::SetActive {
                subscription_id,
                is_active,
            } => {
                let subscription = self
                    .repository
                    .set_active(&subscription_id, is_active)
                    .await?;
                tracing::info!(user_id, %subscription_id, is_active, "reminder subscription switched");
                Ok(Subscribed {
                    subscription,
                    created: false,
                })
            }
            Decision::Unchanged { subscription } => Ok(Subscribed {
                subscription,
                created: false,
            }),
        }
    }
}
