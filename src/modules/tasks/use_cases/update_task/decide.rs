use crate::modules::tasks::core::task::Task;
use crate::modules::tasks::use_cases::update_task::{
    command::UpdateTask,
    decision::{DecideError, Decision},
};

/// Replaces the editable fields. Identity, creator, creation time and the
/// completion flag are kept.
pub fn decide_update(current: Option<Task>, command: UpdateTask) -> Decision {
    let Some(task) = current else {
        return Decision::Rejected {
            reason: DecideError::NotFound,
        };
    };
    if !task.is_created_by(&command.user_id) {
        return Decision::Rejected {
            reason: DecideError::NotCreator,
        };
    }
    let Some(details) = command.details.normalized() else {
        return Decision::Rejected {
            reason: DecideError::EmptyTitle,
        };
    };
    Decision::Accepted {
        task: Task {
            title: details.title,
            description: details.description,
            priority: details.priority,
            due_date: details.due_date,
            assigned_to: details.assigned_to,
            ..task
        },
    }
}

#[cfg(test)]
mod update_task_decide_tests {
    use super::*;
    use crate::modules::tasks::core::task::{Priority, TaskDetails};
    use crate::tests::fixtures::tasks::TaskBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn command() -> UpdateTask {
        UpdateTask {
            task_id: "task-fixed-0001".into(),
            user_id: "user-fixed-0001".into(),
            details: TaskDetails {
                title: "Renamed".into(),
                priority: Priority::Low,
                ..TaskDetails::default()
            },
        }
    }

    #[rstest]
    fn it_should_replace_details_and_keep_the_rest(command: UpdateTask) {
        let current = TaskBuilder::new()
            .description("old notes")
            .assigned_to("u-2")
            .completed()
            .build();
        let Decision::Accepted { task } = decide_update(Some(current.clone()), command) else {
            panic!("expected Accepted");
        };
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.description, None);
        assert_eq!(task.assigned_to, None);
        assert_eq!(task.id, current.id);
        assert_eq!(task.created_at, current.created_at);
        assert!(task.completed);
    }

    #[rstest]
    fn it_should_reject_an_unknown_task(command: UpdateTask) {
        assert_eq!(
            decide_update(None, command),
            Decision::Rejected {
                reason: DecideError::NotFound
            }
        );
    }

    #[rstest]
    fn it_should_reject_an_assignee_edit(mut command: UpdateTask) {
        command.user_id = "u-2".into();
        let current = TaskBuilder::new().assigned_to("u-2").build();
        assert_eq!(
            decide_update(Some(current), command),
            Decision::Rejected {
                reason: DecideError::NotCreator
            }
        );
    }

    #[rstest]
    fn it_should_reject_a_blank_title(mut command: UpdateTask) {
        command.details.title = String::new();
        assert_eq!(
            decide_update(Some(TaskBuilder::new().build()), command),
            Decision::Rejected {
                reason: DecideError::EmptyTitle
            }
        );
    }
}
