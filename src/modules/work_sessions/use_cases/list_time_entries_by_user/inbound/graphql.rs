use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::work_sessions::core::time_entry::TimeEntry;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_hours: Option<f64>,
    pub notes: Option<String>,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(e: TimeEntry) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            start_time: e.start_time,
            end_time: e.end_time,
            total_hours: e.total_hours,
            notes: e.notes,
        }
    }
}

#[derive(Default)]
pub struct TimeEntriesQuery;

#[Object]
impl TimeEntriesQuery {
    async fn time_entries(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_time_entries
            .handle(&user_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
