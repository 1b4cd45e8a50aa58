use crate::modules::work_sessions::adapters::outbound::time_entries::TimeEntryRepository;
use crate::modules::work_sessions::core::periods::Period;
use crate::modules::work_sessions::core::time_entry::TimeEntry;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

/// Sums `total_hours` over the entries the predicate accepts. Open entries count as zero.
pub fn sum_hours<'a>(
    entries: impl IntoIterator<Item = &'a TimeEntry>,
    predicate: impl Fn(&TimeEntry) -> bool,
) -> f64 {
    entries
        .into_iter()
        .filter(|entry| predicate(entry))
        .map(|entry| entry.total_hours.unwrap_or(0.0))
        .sum()
}

pub struct AggregateHoursHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> AggregateHoursHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        user_id: &str,
        predicate: impl Fn(&TimeEntry) -> bool,
    ) -> Result<f64, ApplicationError> {
        let entries = self.repository.list_by_user(user_id).await?;
        Ok(sum_hours(&entries, predicate))
    }

    /// Hours for one of the named periods, resolved against the clock's local now.
    pub async fn for_period(&self, user_id: &str, period: Period) -> Result<f64, ApplicationError> {
        let predicate = period.contains(self.clock.local_now());
        self.handle(user_id, predicate).await
    }
}
