use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::reminders::use_cases::list_subscriptions_by_user::inbound::graphql::{
    GqlReminderSubscription, GqlReminderType,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SubscribeReminderMutation;

#[Object]
impl SubscribeReminderMutation {
    /// Creates the subscription or switches the existing one for this type.
    async fn subscribe_reminder(
        &self,
        context: &Context<'_>,
        user_id: String,
        reminder_type: GqlReminderType,
        #[graphql(default = true)] is_active: bool,
    ) -> GqlResult<GqlReminderSubscription> {
        let state = context.data_unchecked::<AppState>();
        let subscribed = state
            .subscribe_reminder
            .handle(&user_id, reminder_type.into(), is_active)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(subscribed.subscription.into())
    }
}
