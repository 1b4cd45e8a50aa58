use crate::modules::work_sessions::core::hours::{elapsed_hours, round_hours};
use crate::modules::work_sessions::core::time_entry::TimeEntry;
use crate::modules::work_sessions::use_cases::end_session::{
    command::EndSession,
    decision::{DecideError, Decision},
};

/// Closes the open entry. Any supplied non-empty notes replace the stored ones.
pub fn decide_end(active: Option<TimeEntry>, command: EndSession) -> Decision {
    let Some(open) = active.filter(TimeEntry::is_active) else {
        return Decision::Rejected {
            reason: DecideError::NoActiveSession,
        };
    };

    let total_hours = round_hours(elapsed_hours(open.start_time, command.ended_at));
    Decision::Accepted {
        entry: TimeEntry {
            end_time: Some(command.ended_at),
            total_hours: Some(total_hours),
            notes: command.notes.filter(|n| !n.is_empty()).or(open.notes),
            ..open
        },
    }
}
