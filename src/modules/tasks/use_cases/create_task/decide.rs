use crate::modules::tasks::core::task::Task;
use crate::modules::tasks::use_cases::create_task::{
    command::CreateTask,
    decision::{DecideError, Decision},
};

/// New tasks start open.
pub fn decide_create(command: CreateTask) -> Decision {
    let Some(details) = command.details.normalized() else {
        return Decision::Rejected {
            reason: DecideError::EmptyTitle,
        };
    };
    Decision::Accepted {
        task: Task {
            id: command.task_id,
            user_id: command.user_id,
            title: details.title,
            description: details.description,
            priority: details.priority,
            due_date: details.due_date,
            completed: false,
            assigned_to: details.assigned_to,
            created_at: command.created_at,
        },
    }
}
