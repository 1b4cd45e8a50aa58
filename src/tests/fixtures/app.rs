// Fully wired application state over in-memory stores and a manual clock.

use crate::shared::core::clock::ManualClock;
use crate::shared::infrastructure::email::in_memory::InMemoryEmailSender;
use crate::shell::state::{AppState, Stores};
use chrono::{FixedOffset, TimeZone, Utc};
use std::sync::Arc;

pub struct TestApp {
    pub state: AppState,
    pub stores: Stores,
    pub clock: Arc<ManualClock>,
    pub email: Arc<InMemoryEmailSender>,
}

/// Starts at Wednesday 2024-01-10 09:00 UTC with a UTC reference offset.
pub fn make_test_app() -> TestApp {
    make_test_app_with_clock(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
        FixedOffset::east_opt(0).unwrap(),
    ))
}

pub fn make_test_app_with_clock(clock: ManualClock) -> TestApp {
    let stores = Stores::new();
    let clock = Arc::new(clock);
    let email = Arc::new(InMemoryEmailSender::new());
    let state = AppState::new(&stores, clock.clone(), email.clone());
    TestApp {
        state,
        stores,
        clock,
        email,
    }
}
