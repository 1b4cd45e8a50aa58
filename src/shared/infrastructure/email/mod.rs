// Email port.
//
// Purpose
// - Deliver a single rendered message to a single recipient.
//
// Boundaries
// - All-or-nothing: a send either succeeds or reports an error. There is no
//   partial delivery state and no retry inside an adapter.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError>;
}

pub mod in_memory;
pub mod logging;
pub mod resend;
