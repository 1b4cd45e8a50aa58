use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::work_sessions::use_cases::list_time_entries_by_user::inbound::graphql::GqlTimeEntry;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct EndSessionMutation;

#[Object]
impl EndSessionMutation {
    async fn end_session(
        &self,
        context: &Context<'_>,
        user_id: String,
        notes: Option<String>,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let entry = state
            .end_session
            .handle(&user_id, notes)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entry.into())
    }
}
