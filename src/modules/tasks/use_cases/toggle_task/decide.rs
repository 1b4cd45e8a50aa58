use crate::modules::tasks::core::task::Task;
use crate::modules::tasks::use_cases::toggle_task::{
    command::ToggleTask,
    decision::{DecideError, Decision},
};

pub fn decide_toggle(current: Option<Task>, command: ToggleTask) -> Decision {
    let Some(task) = current else {
        return Decision::Rejected {
            reason: DecideError::NotFound,
        };
    };
    if !task.is_visible_to(&command.user_id) {
        return Decision::Rejected {
            reason: DecideError::NotInvolved,
        };
    }
    Decision::Accepted {
        task: Task {
            completed: !task.completed,
            ..task
        },
    }
}
