use crate::modules::reminders::core::subscription::ReminderType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeReminder {
    pub subscription_id: String,
    pub user_id: String,
    pub reminder_type: ReminderType,
    pub is_active: bool,
}
