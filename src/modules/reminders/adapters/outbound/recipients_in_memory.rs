use crate::modules::reminders::adapters::outbound::recipients::RecipientDirectory;
use crate::shared::core::errors::RepositoryError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRecipients {
    emails: RwLock<HashMap<String, String>>,
    is_offline: AtomicBool,
}

impl InMemoryRecipients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::Backend("Recipient directory offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecipientDirectory for InMemoryRecipients {
    async fn register(&self, user_id: &str, email: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.emails
            .write()
            .await
            .insert(user_id.to_string(), email.to_string());
        Ok(())
    }

    async fn email_for(&self, user_id: &str) -> Result<Option<String>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.emails.read().await.get(user_id).cloned())
    }
}
