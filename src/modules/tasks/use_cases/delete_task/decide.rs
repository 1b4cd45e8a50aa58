use crate::modules::tasks::core::task::Task;
use crate::modules::tasks::use_cases::delete_task::{
    command::DeleteTask,
    decision::{DecideError, Decision},
};

pub fn decide_delete(current: Option<&Task>, command: DeleteTask) -> Decision {
    match current {
        None => Decision::Rejected {
            reason: DecideError::NotFound,
        },
        Some(task) if !task.is_created_by(&command.user_id) => Decision::Rejected {
            reason: DecideError::NotCreator,
        },
        Some(_) => Decision::Accepted {
            task_id: command.task_id,
        },
    }
}
