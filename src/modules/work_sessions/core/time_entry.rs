// TimeEntry is the persisted record of one work session.
//
// Lifecycle
// - Created open (no end_time, no total_hours) when a session starts.
// - Closed exactly once: end_time and total_hours are set together.
// - Never mutated after close.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_hours: Option<f64>,
    pub notes: Option<String>,
}

impl TimeEntry {
    pub fn open(
        id: impl Into<String>,
        user_id: impl Into<String>,
        start_time: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            start_time,
            end_time: None,
            total_hours: None,
            notes,
        }
    }

    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Treats missing and whitespace-only notes alike.
pub fn non_blank(notes: Option<String>) -> Option<String> {
    notes.filter(|n| !n.trim().is_empty())
}
