// Shared test fixture for ReminderSubscription values.

use crate::modules::reminders::core::subscription::{ReminderSubscription, ReminderType};
use chrono::{DateTime, Utc};

pub struct SubscriptionBuilder {
    inner: ReminderSubscription,
}

impl Default for SubscriptionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubscriptionBuilder {
    pub fn new() -> Self {
        Self {
            inner: ReminderSubscription {
                id: "sub-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                reminder_type: ReminderType::DailyCheckin,
                is_active: true,
                last_sent: None,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn reminder_type(mut self, v: ReminderType) -> Self {
        self.inner.reminder_type = v;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.inner.is_active = false;
        self
    }

    pub fn last_sent(mut self, v: DateTime<Utc>) -> Self {
        self.inner.last_sent = Some(v);
        self
    }

    pub fn build(self) -> ReminderSubscription {
        self.inner
    }
}
