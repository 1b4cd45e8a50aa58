use crate::modules::work_sessions::adapters::outbound::time_entries::TimeEntryRepository;
use crate::modules::work_sessions::core::time_entry::TimeEntry;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

pub struct ListTimeEntriesHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ListTimeEntriesHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Newest first.
    pub async fn handle(&self, user_id: &str) -> Result<Vec<TimeEntry>, ApplicationError> {
        Ok(self.repository.list_by_user(user_id).await?)
    }
}
