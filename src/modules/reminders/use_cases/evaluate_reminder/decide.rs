use crate::modules::reminders::core::message::ReminderMessage;
use crate::modules::reminders::core::rules::{rule_fires, throttle_allows};
use crate::modules::reminders::core::subscription::{ReminderSubscription, ReminderType};
use crate::modules::reminders::use_cases::evaluate_reminder::decision::{DecideError, Decision};
use crate::modules::work_sessions::core::time_entry::TimeEntry;
use chrono::{DateTime, FixedOffset, Utc};

/// Gate checked before any other lookup: active and outside the throttle window.
pub fn decide_eligible(
    subscription: &ReminderSubscription,
    now: DateTime<Utc>,
) -> Result<(), DecideError> {
    if !subscription.is_active {
        return Err(DecideError::Inactive);
    }
    if !throttle_allows(subscription.last_sent, now) {
        return Err(DecideError::Throttled);
    }
    Ok(())
}

pub fn decide_reminder(
    reminder_type: ReminderType,
    last_entry: Option<&TimeEntry>,
    local_now: DateTime<FixedOffset>,
) -> Decision {
    if !rule_fires(reminder_type, last_entry, local_now) {
        return Decision::Rejected {
            reason: DecideError::RuleNotMet,
        };
    }
    Decision::Accepted {
        message: ReminderMessage::for_type(reminder_type),
    }
}
