use crate::shared::infrastructure::email::{EmailError, EmailSender};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";

#[derive(Serialize)]
struct ResendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Delivers mail through the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendEmailSender {
    client: Client,
    base_url: String,
    api_key: String,
    from: String,
}

impl ResendEmailSender {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError> {
        let body = ResendEmailBody {
            from: &self.from,
            to: [to],
            subject,
            html: html_body,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| EmailError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(EmailError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
