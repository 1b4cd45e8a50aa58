use crate::modules::work_sessions::adapters::outbound::time_entries::TimeEntryRepository;
use crate::modules::work_sessions::core::hours::elapsed_hours;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

/// Live length of the open session, unrounded. Zero when nothing is running.
pub struct CurrentDurationHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> CurrentDurationHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, user_id: &str) -> Result<f64, ApplicationError> {
        let active = self.repository.find_active(user_id).await?;
        Ok(active
            .map(|entry| elapsed_hours(entry.start_time, self.clock.now()))
            .unwrap_or(0.0))
    }
}
