// Background workers started by the binary.
//
// Responsibilities
// - Run one reminder tick per interval. A slow tick delays the next one
//   instead of queueing a burst.

use crate::shell::state::ReminderTick;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

pub fn spawn_reminder_worker(tick: Arc<ReminderTick>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if let Err(e) = tick.handle().await {
                tracing::error!(error = %e, "reminder tick failed");
            }
        }
    })
}

#[cfg(test)]
mod reminder_worker_tests {
    use super::*;
    use crate::modules::reminders::adapters::outbound::recipients::RecipientDirectory;
    use crate::modules::reminders::adapters::outbound::subscriptions::SubscriptionRepository;
    use crate::tests::fixtures::app::{TestApp, make_test_app};
    use crate::tests::fixtures::subscriptions::SubscriptionBuilder;

    #[tokio::test]
    async fn it_should_send_due_reminders_on_the_first_tick() {
        let TestApp {
            state,
            stores,
            email,
            ..
        } = make_test_app();
        stores.recipients.register("u-1", "ana@example.com").await.unwrap();
        stores
            .subscriptions
            .insert(SubscriptionBuilder::new().user_id("u-1").build())
            .await
            .unwrap();

        let worker = spawn_reminder_worker(state.run_reminder_tick.clone(), Duration::from_secs(3600));
        for _ in 0..100 {
            if email.sent_count().await > 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        worker.abort();

        assert_eq!(email.sent_count().await, 1);
    }
}
