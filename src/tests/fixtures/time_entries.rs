// Shared test fixture for TimeEntry values.

use crate::modules::work_sessions::core::hours::{elapsed_hours, round_hours};
use crate::modules::work_sessions::core::time_entry::TimeEntry;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeEntry {
                id: "te-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                start_time: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
                end_time: None,
                total_hours: None,
                notes: None,
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

    pub fn start_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    /// Closes the entry `after` its start, with hours rounded as on session end.
    pub fn closed_after(mut self, after: TimeDelta) -> Self {
        let end = self.inner.start_time + after;
        self.inner.end_time = Some(end);
        self.inner.total_hours = Some(round_hours(elapsed_hours(self.inner.start_time, end)));
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_an_open_entry_by_default() {
        let entry = TimeEntryBuilder::default().build();
        assert_eq!(entry.id, "te-fixed-0001");
        assert_eq!(entry.user_id, "user-fixed-0001");
        assert!(entry.is_active());
    }

    #[rstest]
    fn it_should_close_the_entry_with_rounded_hours() {
        let entry = TimeEntryBuilder::new()
            .closed_after(TimeDelta::minutes(90))
            .build();
        assert_eq!(entry.total_hours, Some(1.5));
        assert_eq!(
            entry.end_time,
            Some(entry.start_time + TimeDelta::minutes(90))
        );
    }
}
