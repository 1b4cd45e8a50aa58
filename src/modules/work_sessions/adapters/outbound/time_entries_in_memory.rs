// In memory time entry store.
//
// Purpose
// - Back the service and its tests without a database.
//
// Responsibilities
// - Keep entries per id behind one lock so the open-entry uniqueness check and
//   the write happen atomically, the way a unique partial index on
//   (user_id) where end_time is null would.

use crate::modules::work_sessions::adapters::outbound::time_entries::TimeEntryRepository;
use crate::modules::work_sessions::core::time_entry::TimeEntry;
use crate::shared::core::errors::RepositoryError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimeEntries {
    rows: RwLock<HashMap<String, TimeEntry>>,
    is_offline: AtomicBool,
}

impl InMemoryTimeEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::Backend("Time entry store offline".into()));
        }
        Ok(())
    }

    async fn user_entries(&self, user_id: &str) -> Vec<TimeEntry> {
        let guard = self.rows.read().await;
        let mut items: Vec<TimeEntry> = guard
            .values()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by_key(|row| row.start_time);
        items.reverse();
        items
    }
}

#[async_trait::async_trait]
impl TimeEntryRepository for InMemoryTimeEntries {
    async fn insert(&self, entry: TimeEntry) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let has_open = guard
            .values()
            .any(|row| row.user_id == entry.user_id && row.is_active());
        if entry.is_active() && has_open {
            return Err(RepositoryError::ActiveSessionExists {
                user_id: entry.user_id,
            });
        }
        guard.insert(entry.id.clone(), entry);
        Ok(())
    }

    async fn close(&self, entry: &TimeEntry) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        match guard.get_mut(&entry.id) {
            Some(stored) if stored.is_active() => {
                *stored = entry.clone();
                Ok(())
            }
            _ => Err(RepositoryError::EntryNotOpen {
                time_entry_id: entry.id.clone(),
            }),
        }
    }

    async fn find_active(&self, user_id: &str) -> Result<Option<TimeEntry>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard
            .values()
            .find(|row| row.user_id == user_id && row.is_active())
            .cloned())
    }

    async fn latest_for_user(&self, user_id: &str) -> Result<Option<TimeEntry>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.user_entries(user_id).await.into_iter().next())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<TimeEntry>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.user_entries(user_id).await)
    }
}
