// EmailSender that only logs the message. Used when no provider key is configured.

use crate::shared::infrastructure::email::{EmailError, EmailSender};

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEmailSender;

#[async_trait::async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError> {
        tracing::info!(%to, %subject, body_len = html_body.len(), "email not delivered, no provider configured");
        Ok(())
    }
}
