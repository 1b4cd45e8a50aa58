use crate::modules::work_sessions::core::time_entry::TimeEntry;
use crate::shared::core::errors::RepositoryError;
use async_trait::async_trait;

/// Storage port for time entries.
///
/// Implementations must hold the single-open-entry invariant themselves:
/// `insert` rejects a second open entry for the same user and `close` only
/// succeeds while the stored entry is still open.
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    async fn insert(&self, entry: TimeEntry) -> Result<(), RepositoryError>;

    async fn close(&self, entry: &TimeEntry) -> Result<(), RepositoryError>;

    async fn find_active(&self, user_id: &str) -> Result<Option<TimeEntry>, RepositoryError>;

    /// The entry with the latest start time, open or closed.
    async fn latest_for_user(&self, user_id: &str) -> Result<Option<TimeEntry>, RepositoryError>;

    /// All entries of the user, newest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TimeEntry>, RepositoryError>;
}
