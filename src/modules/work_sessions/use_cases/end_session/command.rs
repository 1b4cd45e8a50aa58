use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndSession {
    pub user_id: String,
    pub notes: Option<String>,
    pub ended_at: DateTime<Utc>,
}
