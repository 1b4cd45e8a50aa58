// Reminder eligibility rules.
//
// Two notions of "day" live here and must stay apart:
// - the throttle is a rolling 24 hour window on UTC instants;
// - "today" for the daily check-in is calendar-date equality in the
//   reference offset.

use crate::modules::reminders::core::subscription::ReminderType;
use crate::modules::work_sessions::core::periods::started_today;
use crate::modules::work_sessions::core::time_entry::TimeEntry;
use chrono::{DateTime, Datelike, FixedOffset, TimeDelta, Timelike, Utc, Weekday};

pub const THROTTLE_WINDOW_HOURS: i64 = 24;
pub const DAILY_CHECKIN_HOUR: u32 = 9;
pub const END_DAY_HOUR: u32 = 18;

pub fn throttle_window() -> TimeDelta {
    TimeDelta::hours(THROTTLE_WINDOW_HOURS)
}

pub fn throttle_allows(last_sent: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_sent {
        None => true,
        Some(sent) => now - sent >= throttle_window(),
    }
}

/// Whether the reminder's condition holds, given the user's most recent entry.
pub fn rule_fires(
    reminder_type: ReminderType,
    last_entry: Option<&TimeEntry>,
    local_now: DateTime<FixedOffset>,
) -> bool {
    match reminder_type {
        ReminderType::DailyCheckin => {
            let worked_today = last_entry.is_some_and(started_today(local_now));
            !worked_today && local_now.hour() >= DAILY_CHECKIN_HOUR
        }
        ReminderType::EndDay => {
            last_entry.is_some_and(TimeEntry::is_active) && local_now.hour() >= END_DAY_HOUR
        }
        ReminderType::WeeklySummary => local_now.weekday() == Weekday::Mon,
    }
}
