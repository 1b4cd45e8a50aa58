use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::reminders::use_cases::run_reminder_tick::handler::TickReport;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTickReport {
    pub processed: u64,
    pub sent: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl From<TickReport> for GqlTickReport {
    fn from(r: TickReport) -> Self {
        Self {
            processed: r.processed as u64,
            sent: r.sent as u64,
            skipped: r.skipped as u64,
            failed: r.failed as u64,
        }
    }
}

#[derive(Default)]
pub struct RunRemindersMutation;

#[Object]
impl RunRemindersMutation {
    async fn run_reminders(&self, context: &Context<'_>) -> GqlResult<GqlTickReport> {
        let state = context.data_unchecked::<AppState>();
        let report = state
            .run_reminder_tick
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(report.into())
    }
}
