// Evaluates one reminder subscription for the current tick.
//
// Purpose
// - Decide whether a reminder is due, send it, and stamp `last_sent`.
//
// Responsibilities
// - Never overlap with another evaluation of the same subscription.
// - Read the clock afresh at the throttle check, the rule check and the stamp.
// - Leave `last_sent` untouched when delivery fails so the next tick retries.

use crate::modules::reminders::adapters::outbound::recipients::RecipientDirectory;
use crate::modules::reminders::adapters::outbound::subscriptions::SubscriptionRepository;
use crate::modules::reminders::use_cases::evaluate_reminder::decide::{
    decide_eligible, decide_reminder,
};
use crate::modules::reminders::use_cases::evaluate_reminder::decision::{DecideError, Decision};
use crate::modules::work_sessions::adapters::outbound::time_entries::TimeEntryRepository;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::{ApplicationError, RepositoryError};
use crate::shared::infrastructure::email::EmailSender;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Another evaluation of the same subscription is running.
    InFlight,
    Missing,
    Inactive,
    Throttled,
    NoRecipient,
    RuleNotMet,
}

impl From<DecideError> for SkipReason {
    fn from(e: DecideError) -> Self {
        match e {
            DecideError::Inactive => Self::Inactive,
            DecideError::Throttled => Self::Throttled,
            DecideError::RuleNotMet => Self::RuleNotMet,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderOutcome {
    Sent { sent_at: DateTime<Utc> },
    Skipped { reason: SkipReason },
}

pub struct EvaluateReminderHandler<TSubscriptions, TTimeEntries, TRecipients>
where
    TSubscriptions: SubscriptionRepository + 'static,
    TTimeEntries: TimeEntryRepository + 'static,
    TRecipients: RecipientDirectory + 'static,
{
    subscriptions: Arc<TSubscriptions>,
    time_entries: Arc<TTimeEntries>,
    recipients: Arc<TRecipients>,
    email: Arc<dyn EmailSender>,
    clock: Arc<dyn Clock>,
    in_flight: KeyedLocks,
}

impl<TSubscriptions, TTimeEntries, TRecipients>
    EvaluateReminderHandler<TSubscriptions, TTimeEntries, TRecipients>
where
    TSubscriptions: SubscriptionRepository + 'static,
    TTimeEntries: TimeEntryRepository + 'static,
    TRecipients: RecipientDirectory + 'static,
{
    pub fn new(
        subscriptions: Arc<TSubscriptions>,
        time_entries: Arc<TTimeEntries>,
        recipients: Arc<TRecipients>,
        email: Arc<dyn EmailSender>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscriptions,
            time_entries,
            recipients,
            email,
            clock,
            in_flight: KeyedLocks::new(),
        }
    }

    pub async fn handle(&self, subscription_id: &str) -> Result<ReminderOutcome, ApplicationError> {
        let Some(_guard) = self.in_flight.try_lock(subscription_id).await else {
            return Ok(skipped(SkipReason::InFlight));
        };

        // Re-read under the lock; the caller's snapshot may be stale.
        let Some(subscription) = self.subscriptions.get(subscription_id).await? else {
            return Ok(skipped(SkipReason::Missing));
        };
        if let Err(reason) = decide_eligible(&subscription, self.clock.now()) {
            return Ok(skipped(reason.into()));
        }

        let Some(email) = self.recipients.email_for(&subscription.user_id).await? else {
            tracing::debug!(
                subscription_id,
                user_id = %subscription.user_id,
                "no recipient address, skipping reminder"
            );
            return Ok(skipped(SkipReason::NoRecipient));
        };

        let last_entry = self
            .time_entries
            .latest_for_user(&subscription.user_id)
            .await?;
        let message = match decide_reminder(
            subscription.reminder_type,
            last_entry.as_ref(),
            self.clock.local_now(),
        ) {
            Decision::Accepted { message } => message,
            Decision::Rejected { reason } => return Ok(skipped(reason.into())),
        };

        if let Err(e) = self
            .email
            .send(&email, &message.subject, &message.html_body)
            .await
        {
            tracing::warn!(
                subscription_id,
                reminder_type = subscription.reminder_type.as_str(),
                error = %e,
                "reminder delivery failed"
            );
            return Err(e.into());
        }

        let sent_at = self.clock.now();
        match self
            .subscriptions
            .mark_sent(subscription_id, subscription.last_sent, sent_at)
            .await
        {
            Ok(()) => {}
            Err(RepositoryError::StaleSubscription { .. }) => {
                tracing::warn!(subscription_id, "last_sent changed concurrently, stamp dropped");
            }
            Err(other) => return Err(other.into()),
        }

        tracing::info!(
            subscription_id,
            user_id = %subscription.user_id,
            reminder_type = subscription.reminder_type.as_str(),
            "reminder sent"
        );
        Ok(ReminderOutcome::Sent { sent_at })
    }
}

fn skipped(reason: SkipReason) -> ReminderOutcome {
    ReminderOutcome::Skipped { reason }
}
