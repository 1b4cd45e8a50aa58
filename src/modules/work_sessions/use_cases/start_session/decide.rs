use crate::modules::work_sessions::core::time_entry::{TimeEntry, non_blank};
use crate::modules::work_sessions::use_cases::start_session::{
    command::StartSession,
    decision::{DecideError, Decision},
};

/// A session may start only when the user has no open entry. An open entry
/// is never closed implicitly.
pub fn decide_start(active: Option<&TimeEntry>, command: StartSession) -> Decision {
    if active.is_some() {
        return Decision::Rejected {
            reason: DecideError::AlreadyActive,
        };
    }
    Decision::Accepted {
        entry: TimeEntry::open(
            command.time_entry_id,
            command.user_id,
            command.started_at,
            non_blank(command.notes),
        ),
    }
}
