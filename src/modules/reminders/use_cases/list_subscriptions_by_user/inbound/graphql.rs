use async_graphql::{Context, Enum, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::reminders::core::subscription::{ReminderSubscription, ReminderType};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlReminderType {
    DailyCheckin,
    EndDay,
    WeeklySummary,
}

impl From<GqlReminderType> for ReminderType {
    fn from(t: GqlReminderType) -> Self {
        match t {
            GqlReminderType::DailyCheckin => ReminderType::DailyCheckin,
            GqlReminderType::EndDay => ReminderType::EndDay,
            GqlReminderType::WeeklySummary => ReminderType::WeeklySummary,
        }
    }
}

impl From<ReminderType> for GqlReminderType {
    fn from(t: ReminderType) -> Self {
        match t {
            ReminderType::DailyCheckin => GqlReminderType::DailyCheckin,
            ReminderType::EndDay => GqlReminderType::EndDay,
            ReminderType::WeeklySummary => GqlReminderType::WeeklySummary,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReminderSubscription {
    pub id: String,
    pub user_id: String,
    pub reminder_type: GqlReminderType,
    pub is_active: bool,
    pub last_sent: Option<DateTime<Utc>>,
}

impl From<ReminderSubscription> for GqlReminderSubscription {
    fn from(s: ReminderSubscription) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            reminder_type: s.reminder_type.into(),
            is_active: s.is_active,
            last_sent: s.last_sent,
        }
    }
}

#[derive(Default)]
pub struct ReminderSubscriptionsQuery;

#[Object]
impl ReminderSubscriptionsQuery {
    async fn reminder_subscriptions(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<Vec<GqlReminderSubscription>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_subscriptions
            .handle(&user_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
