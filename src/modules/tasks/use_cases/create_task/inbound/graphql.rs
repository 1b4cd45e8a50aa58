use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::tasks::core::task::TaskDetails;
use crate::modules::tasks::use_cases::list_tasks_for_user::inbound::graphql::{GqlPriority, GqlTask};
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct GqlTaskInput {
    pub title: String,
    pub description: Option<String>,
    #[graphql(default_with = "GqlPriority::Medium")]
    pub priority: GqlPriority,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
}

impl From<GqlTaskInput> for TaskDetails {
    fn from(i: GqlTaskInput) -> Self {
        Self {
            title: i.title,
            description: i.description,
            priority: i.priority.into(),
            due_date: i.due_date,
            assigned_to: i.assigned_to,
        }
    }
}

#[derive(Default)]
pub struct CreateTaskMutation;

#[Object]
impl CreateTaskMutation {
    async fn create_task(
        &self,
        context: &Context<'_>,
        user_id: String,
        input: GqlTaskInput,
    ) -> GqlResult<GqlTask> {
        let state = context.data_unchecked::<AppState>();
        let task = state
            .create_task
            .handle(&user_id, input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(task.into())
    }
}
