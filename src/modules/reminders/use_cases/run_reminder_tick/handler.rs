use crate::modules::reminders::adapters::outbound::recipients::RecipientDirectory;
use crate::modules::reminders::adapters::outbound::subscriptions::SubscriptionRepository;
use crate::modules::reminders::core::rules::throttle_window;
use crate::modules::reminders::use_cases::evaluate_reminder::handler::{
    EvaluateReminderHandler, ReminderOutcome,
};
use crate::modules::work_sessions::adapters::outbound::time_entries::TimeEntryRepository;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationError;
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub processed: usize,
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct RunReminderTickHandler<TSubscriptions, TTimeEntries, TRecipients>
where
    TSubscriptions: SubscriptionRepository + 'static,
    TTimeEntries: TimeEntryRepository + 'static,
    TRecipients: RecipientDirectory + 'static,
{
    subscriptions: Arc<TSubscriptions>,
    evaluator: Arc<EvaluateReminderHandler<TSubscriptions, TTimeEntries, TRecipients>>,
    clock: Arc<dyn Clock>,
}

impl<TSubscriptions, TTimeEntries, TRecipients>
    RunReminderTickHandler<TSubscriptions, TTimeEntries, TRecipients>
where
    TSubscriptions: SubscriptionRepository + 'static,
    TTimeEntries: TimeEntryRepository + 'static,
    TRecipients: RecipientDirectory + 'static,
{
    pub fn new(
        subscriptions: Arc<TSubscriptions>,
        evaluator: Arc<EvaluateReminderHandler<TSubscriptions, TTimeEntries, TRecipients>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscriptions,
            evaluator,
            clock,
        }
    }

    /// Evaluates every due subscription in parallel. A failing subscription is
    /// counted and logged; it never aborts the rest of the tick.
    pub async fn handle(&self) -> Result<TickReport, ApplicationError> {
        let due = self
            .subscriptions
            .list_due(self.clock.now() - throttle_window())
            .await?;

        let mut report = TickReport {
            processed: due.len(),
            ..TickReport::default()
        };

        let mut tasks = JoinSet::new();
        for subscription in due {
            let evaluator = self.evaluator.clone();
            tasks.spawn(async move { evaluator.handle(&subscription.id).await });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(ReminderOutcome::Sent { .. })) => report.sent += 1,
                Ok(Ok(ReminderOutcome::Skipped { .. })) => report.skipped += 1,
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "reminder evaluation failed");
                    report.failed += 1;
                }
                Err(e) => {
                    tracing::error!(error = %e, "reminder evaluation task aborted");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            processed = report.processed,
            sent = report.sent,
            skipped = report.skipped,
            failed = report.failed,
            "reminder tick finished"
        );
        Ok(report)
    }
}
