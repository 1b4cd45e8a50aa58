use crate::modules::reminders::core::subscription::ReminderType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderMessage {
    pub subject: String,
    pub html_body: String,
}

impl ReminderMessage {
    pub fn for_type(reminder_type: ReminderType) -> Self {
        let (subject, line) = match reminder_type {
            ReminderType::DailyCheckin => (
                "Time to check in",
                "Don't forget to start your work session today!",
            ),
            ReminderType::EndDay => (
                "Time to wrap up",
                "Don't forget to end your work session for today!",
            ),
            ReminderType::WeeklySummary => (
                "Your weekly summary",
                "Take a moment to review the hours you worked last week.",
            ),
        };
        Self {
            subject: subject.to_string(),
            html_body: format!("<p>{line}</p>"),
        }
    }
}
