// Predicates for aggregating hours over a period.
//
// Both periods are evaluated in the reference offset of the given local time:
// - Today: the entry started on the same local calendar date.
// - Week: the entry started at or after the most recent Sunday 00:00 local.

use crate::modules::work_sessions::core::time_entry::TimeEntry;
use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    Week,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
        }
    }

    pub fn contains(
        &self,
        local_now: DateTime<FixedOffset>,
    ) -> Box<dyn Fn(&TimeEntry) -> bool + Send + Sync> {
        match self {
            Self::Today => Box::new(started_today(local_now)),
            Self::Week => Box::new(started_this_week(local_now)),
        }
    }
}

pub fn started_today(local_now: DateTime<FixedOffset>) -> impl Fn(&TimeEntry) -> bool + Send + Sync {
    let offset = *local_now.offset();
    let today = local_now.date_naive();
    move |entry| entry.start_time.with_timezone(&offset).date_naive() == today
}

pub fn started_this_week(local_now: DateTime<FixedOffset>) -> impl Fn(&TimeEntry) -> bool + Send + Sync {
    let week_start = week_start(local_now);
    move |entry| entry.start_time >= week_start
}

/// Most recent Sunday 00:00 in the offset of `local_now`, as a UTC instant.
pub fn week_start(local_now: DateTime<FixedOffset>) -> DateTime<Utc> {
    let days_since_sunday = i64::from(local_now.weekday().num_days_from_sunday());
    let sunday = local_now.date_naive() - TimeDelta::days(days_since_sunday);
    let local_midnight = sunday.and_time(NaiveTime::MIN);
    (local_midnight - TimeDelta::seconds(i64::from(local_now.offset().local_minus_utc())))
        .and_utc()
}
