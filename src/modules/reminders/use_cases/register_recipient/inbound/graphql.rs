use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterRecipientMutation;

#[Object]
impl RegisterRecipientMutation {
    /// Returns the stored, trimmed address.
    async fn register_recipient(
        &self,
        context: &Context<'_>,
        user_id: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let recipient = state
            .register_recipient
            .handle(&user_id, email)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(recipient.email)
    }
}
