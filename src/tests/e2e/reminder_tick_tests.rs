use crate::modules::reminders::adapters::outbound::recipients::RecipientDirectory;
use crate::modules::reminders::adapters::outbound::subscriptions::SubscriptionRepository;
use crate::modules::reminders::core::subscription::ReminderType;
use crate::modules::reminders::use_cases::run_reminder_tick::handler::TickReport;
use crate::shared::core::clock::ManualClock;
use crate::tests::fixtures::app::{TestApp, make_test_app_with_clock};
use crate::tests::fixtures::subscriptions::SubscriptionBuilder;
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};

fn offset() -> FixedOffset {
    FixedOffset::east_opt(2 * 3600).unwrap()
}

fn local(d: u32, h: u32, m: u32) -> DateTime<Utc> {
    offset()
        .with_ymd_and_hms(2024, 1, d, h, m, 0)
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn runs_a_working_day_of_reminder_ticks() {
    // Tuesday 2024-01-09, 08:45 local.
    let TestApp {
        state,
        stores,
        clock,
        email,
    } = make_test_app_with_clock(ManualClock::new(local(9, 8, 45), offset()));
    stores.recipients.register("u-1", "ana@example.com").await.unwrap();
    stores
        .subscriptions
        .insert(SubscriptionBuilder::new().id("checkin").user_id("u-1").build())
        .await
        .unwrap();
    stores
        .subscriptions
        .insert(
            SubscriptionBuilder::new()
                .id("end-day")
                .user_id("u-1")
                .reminder_type(ReminderType::EndDay)
                .build(),
        )
        .await
        .unwrap();
    let tick = state.run_reminder_tick.clone();

    // Too early for either reminder.
    let report = tick.handle().await.unwrap();
    assert_eq!(report.sent, 0);
    assert_eq!(report.skipped, 2);

    // 09:05: nothing tracked yet, the check-in goes out and is stamped.
    clock.set(local(9, 9, 5));
    assert_eq!(tick.handle().await.unwrap().sent, 1);
    let checkin = stores.subscriptions.get("checkin").await.unwrap().unwrap();
    assert_eq!(checkin.last_sent, Some(local(9, 9, 5)));

    // The user starts working; the check-in is throttled anyway.
    clock.set(local(9, 9, 30));
    state.start_session.handle("u-1", None).await.unwrap();
    let report = tick.handle().await.unwrap();
    assert_eq!(report, TickReport { processed: 1, sent: 0, skipped: 1, failed: 0 });

    // 18:30 with the session still open: end of day fires, but delivery fails.
    clock.set(local(9, 18, 30));
    email.toggle_offline();
    let report = tick.handle().await.unwrap();
    assert_eq!(report.failed, 1);
    let end_day = stores.subscriptions.get("end-day").await.unwrap().unwrap();
    assert_eq!(end_day.last_sent, None);

    // Provider back: the next tick delivers it.
    email.toggle_offline();
    clock.advance(TimeDelta::minutes(15));
    assert_eq!(tick.handle().await.unwrap().sent, 1);
    let end_day = stores.subscriptions.get("end-day").await.unwrap().unwrap();
    assert_eq!(end_day.last_sent, Some(local(9, 18, 45)));

    let sent = email.sent.lock().await;
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|m| m.to == "ana@example.com"));
}

#[tokio::test]
async fn sends_the_weekly_summary_on_monday_morning() {
    let TestApp {
        state,
        stores,
        email,
        ..
    } = make_test_app_with_clock(ManualClock::new(local(8, 10, 0), offset()));
    stores.recipients.register("u-1", "ana@example.com").await.unwrap();
    stores
        .subscriptions
        .insert(
            SubscriptionBuilder::new()
                .id("weekly")
                .user_id("u-1")
                .reminder_type(ReminderType::WeeklySummary)
                .last_sent(local(1, 10, 0))
                .build(),
        )
        .await
        .unwrap();

    let report = state.run_reminder_tick.handle().await.unwrap();

    assert_eq!(report.sent, 1);
    let sent = email.sent.lock().await;
    assert_eq!(sent[0].subject, "Your weekly summary");
}
