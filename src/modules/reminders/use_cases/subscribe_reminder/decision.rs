use crate::modules::reminders::core::subscription::ReminderSubscription;

#[derive(Debug, PartialEq)]
pub enum Decision {
    Create { subscription: ReminderSubscription },
    SetActive { subscription_id: String, is_active: bool },
    Unchanged { subscription: ReminderSubscription },
}
