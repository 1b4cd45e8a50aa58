use crate::modules::reminders::adapters::outbound::recipients::RecipientDirectory;
use crate::modules::reminders::use_cases::register_recipient::command::RegisterRecipient;
use crate::modules::reminders::use_cases::register_recipient::decide::decide_register;
use crate::modules::reminders::use_cases::register_recipient::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    pub user_id: String,
    pub email: String,
}

pub struct RegisterRecipientHandler<TDirectory>
where
    TDirectory: RecipientDirectory + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> RegisterRecipientHandler<TDirectory>
where
    TDirectory: RecipientDirectory + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, user_id: &str, email: String) -> Result<Recipient, ApplicationError> {
        let command = RegisterRecipient {
            user_id: user_id.to_string(),
            email,
        };
        match decide_register(command) {
            Decision::Accepted { user_id, email } => {
                self.directory.register(&user_id, &email).await?;
                tracing::info!(%user_id, "reminder recipient registered");
                Ok(Recipient { user_id, email })
            }
            Decision::Rejected { reason } => Err(ApplicationError::InvalidInput(reason.to_string())),
        }
    }
}
