use crate::modules::reminders::core::message::ReminderMessage;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum DecideError {
    #[error("subscription is not active")]
    Inactive,
    #[error("reminder was sent within the throttle window")]
    Throttled,
    #[error("reminder condition does not hold")]
    RuleNotMet,
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted { message: ReminderMessage },
    Rejected { reason: DecideError },
}
