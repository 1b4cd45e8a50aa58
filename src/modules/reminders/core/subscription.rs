use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    DailyCheckin,
    EndDay,
    WeeklySummary,
}

impl ReminderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyCheckin => "daily_checkin",
            Self::EndDay => "end_day",
            Self::WeeklySummary => "weekly_summary",
        }
    }
}

/// A user's opt-in to one kind of reminder. `last_sent` never moves backwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSubscription {
    pub id: String,
    pub user_id: String,
    pub reminder_type: ReminderType,
    pub is_active: bool,
    pub last_sent: Option<DateTime<Utc>>,
}
