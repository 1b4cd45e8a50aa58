use crate::modules::work_sessions::adapters::outbound::time_entries::TimeEntryRepository;
use crate::modules::work_sessions::core::time_entry::TimeEntry;
use crate::modules::work_sessions::use_cases::end_session::command::EndSession;
use crate::modules::work_sessions::use_cases::end_session::decide::decide_end;
use crate::modules::work_sessions::use_cases::end_session::decision::{DecideError, Decision};
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::{ApplicationError, RepositoryError};
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use std::sync::Arc;

pub struct EndSessionHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
    user_locks: Arc<KeyedLocks>,
}

impl<TRepository> EndSessionHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    /// `user_locks` must be shared with the start-session handler.
    pub fn new(
        repository: Arc<TRepository>,
        clock: Arc<dyn Clock>,
        user_locks: Arc<KeyedLocks>,
    ) -> Self {
        Self {
            repository,
            clock,
            user_locks,
        }
    }

    pub async fn handle(
        &self,
        user_id: &str,
        notes: Option<String>,
    ) -> Result<TimeEntry, ApplicationError> {
        let _guard = self.user_locks.lock(user_id).await;

        let active = self.repository.find_active(user_id).await?;
        let command = EndSession {
            user_id: user_id.to_string(),
            notes,
            ended_at: self.clock.now(),
        };

        let no_active_session = || ApplicationError::NoActiveSession {
            user_id: user_id.to_string(),
        };
        match decide_end(active, command) {
            Decision::Accepted { entry } => {
                match self.repository.close(&entry).await {
                    Ok(()) => {}
                    Err(RepositoryError::EntryNotOpen { .. }) => return Err(no_active_session()),
                    Err(other) => return Err(other.into()),
                }
                tracing::info!(
                    user_id,
                    time_entry_id = %entry.id,
                    total_hours = entry.total_hours.unwrap_or_default(),
                    "work session ended"
                );
                Ok(entry)
            }
            Decision::Rejected {
                reason: DecideError::NoActiveSession,
            } => Err(no_active_session()),
        }
    }
}
