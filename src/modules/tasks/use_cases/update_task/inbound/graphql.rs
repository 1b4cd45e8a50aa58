use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::tasks::use_cases::create_task::inbound::graphql::GqlTaskInput;
use crate::modules::tasks::use_cases::list_tasks_for_user::inbound::graphql::GqlTask;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateTaskMutation;

#[Object]
impl UpdateTaskMutation {
    async fn update_task(
        &self,
        context: &Context<'_>,
        user_id: String,
        task_id: String,
        input: GqlTaskInput,
    ) -> GqlResult<GqlTask> {
        let state = context.data_unchecked::<AppState>();
        let task = state
            .update_task
            .handle(&user_id, &task_id, input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(task.into())
    }
}
