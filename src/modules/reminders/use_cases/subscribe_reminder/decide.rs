use crate::modules::reminders::core::subscription::ReminderSubscription;
use crate::modules::reminders::use_cases::subscribe_reminder::{
    command::SubscribeReminder, decision::Decision,
};

/// One subscription per user and reminder type. An existing one is switched
/// on or off and keeps its id and `last_sent`.
pub fn decide_subscribe(existing: &[ReminderSubscription], command: SubscribeReminder) -> Decision {
    match existing
        .iter()
        .find(|sub| sub.reminder_type == command.reminder_type)
    {
        Some(current) if current.is_active == command.is_active => Decision::Unchanged {
            subscription: current.clone(),
        },
        Some(current) => Decision::SetActive {
            subscription_id: current.id.clone(),
            is_active: command.is_active,
        },
        None => Decision::Create {
            subscription: ReminderSubscription {
                id: command.subscription_id,
                user_id: command.user_id,
                reminder_type: command.reminder_type,
                is_active: command.is_active,
                last_sent: None,
            },
        },
    }
}
