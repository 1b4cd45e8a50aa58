// In memory implementation of the EmailSender port.
//
// Purpose
// - Let tests inspect which reminders went out and simulate provider outages.

use crate::shared::infrastructure::email::{EmailError, EmailSender, OutgoingEmail};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryEmailSender {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    is_offline: AtomicBool,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait::async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(EmailError::Transport("Email provider offline".into()));
        }
        self.sent.lock().await.push(OutgoingEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(())
    }
}
