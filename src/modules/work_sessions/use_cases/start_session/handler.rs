use crate::modules::work_sessions::adapters::outbound::time_entries::TimeEntryRepository;
use crate::modules::work_sessions::core::time_entry::TimeEntry;
use crate::modules::work_sessions::use_cases::start_session::command::StartSession;
use crate::modules::work_sessions::use_cases::start_session::decide::decide_start;
use crate::modules::work_sessions::use_cases::start_session::decision::{DecideError, Decision};
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use std::sync::Arc;
use uuid::Uuid;

pub struct StartSessionHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
    user_locks: Arc<KeyedLocks>,
}

impl<TRepository> StartSessionHandler<TRepository>
where
    TRepository: TimeEntryRepository + 'static,
{
    /// `user_locks` must be shared with the end-session handler.
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
        let command = StartSession {
            time_entry_id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            notes,
            started_at: self.clock.now(),
        };

        match decide_start(active.as_ref(), command) {
            Decision::Accepted { entry } => {
                self.repository.insert(entry.clone()).await?;
                tracing::info!(user_id, time_entry_id = %entry.id, "work session started");
                Ok(entry)
            }
            Decision::Rejected {
                reason: DecideError::AlreadyActive,
            } => Err(ApplicationError::AlreadyActive {
                user_id: user_id.to_string(),
            }),
        }
    }
}
