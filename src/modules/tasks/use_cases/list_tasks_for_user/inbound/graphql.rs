use async_graphql::{Context, Enum, Object, Result as GqlResult};
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::tasks::core::task::{Priority, Task};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlPriority {
    Low,
    Medium,
    High,
}

impl From<GqlPriority> for Priority {
    fn from(p: GqlPriority) -> Self {
        match p {
            GqlPriority::Low => Priority::Low,
            GqlPriority::Medium => Priority::Medium,
            GqlPriority::High => Priority::High,
        }
    }
}

impl From<Priority> for GqlPriority {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Low => GqlPriority::Low,
            Priority::Medium => GqlPriority::Medium,
            Priority::High => GqlPriority::High,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTask {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: GqlPriority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for GqlTask {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id,
            title: t.title,
            description: t.description,
            priority: t.priority.into(),
            due_date: t.due_date,
            completed: t.completed,
            assigned_to: t.assigned_to,
            created_at: t.created_at,
        }
    }
}

#[derive(Default)]
pub struct TasksQuery;

#[Object]
impl TasksQuery {
    async fn tasks(&self, context: &Context<'_>, user_id: String) -> GqlResult<Vec<GqlTask>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_tasks
            .handle(&user_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
