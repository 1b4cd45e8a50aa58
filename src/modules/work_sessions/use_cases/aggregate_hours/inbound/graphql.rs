use async_graphql::{Context, Enum, Object, Result as GqlResult};

use crate::modules::work_sessions::core::periods::Period;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlPeriod {
    Today,
    Week,
}

impl From<GqlPeriod> for Period {
    fn from(p: GqlPeriod) -> Self {
        match p {
            GqlPeriod::Today => Period::Today,
            GqlPeriod::Week => Period::Week,
        }
    }
}

#[derive(Default)]
pub struct WorkSessionHoursQuery;

#[Object]
impl WorkSessionHoursQuery {
    /// Hours of the running session, zero when none is open.
    async fn current_duration(&self, context: &Context<'_>, user_id: String) -> GqlResult<f64> {
        let state = context.data_unchecked::<AppState>();
        state
            .current_duration
            .handle(&user_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }

    async fn hours(
        &self,
        context: &Context<'_>,
        user_id: String,
        period: GqlPeriod,
    ) -> GqlResult<f64> {
        let state = context.data_unchecked::<AppState>();
        state
            .aggregate_hours
            .for_period(&user_id, period.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
