use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTaskMutation;

#[Object]
impl DeleteTaskMutation {
    async fn delete_task(
        &self,
        context: &Context<'_>,
        user_id: String,
        task_id: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_task
            .handle(&user_id, &task_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
