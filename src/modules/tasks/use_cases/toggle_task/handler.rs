use crate::modules::tasks::adapters::outbound::tasks::TaskRepository;
use crate::modules::tasks::core::task::Task;
use crate::modules::tasks::use_cases::toggle_task::command::ToggleTask;
use crate::modules::tasks::use_cases::toggle_task::decide::decide_toggle;
use crate::modules::tasks::use_cases::toggle_task::decision::{DecideError, Decision};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use std::sync::Arc;

pub struct ToggleTaskHandler<TRepository>
where
    TRepository: TaskRepository + 'static,
{
    repository: Arc<TRepository>,
    task_locks: Arc<KeyedLocks>,
}

impl<TRepository> ToggleTaskHandler<TRepository>
where
    TRepository: TaskRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, task_locks: Arc<KeyedLocks>) -> Self {
        Self {
            repository,
            task_locks,
        }
    }

    pub async fn handle(&self, user_id: &str, task_id: &str) -> Result<Task, ApplicationError> {
        let _guard = self.task_locks.lock(task_id).await;

        let current = self.repository.get(task_id).await?;
        let command = ToggleTask {
            task_id: task_id.to_string(),
            user_id: user_id.to_string(),
        };

        match decide_toggle(current, command) {
            Decision::Accepted { task } => {
                self.repository.update(task.clone()).await?;
                tracing::info!(user_id, task_id, completed = task.completed, "task toggled");
                Ok(task)
            }
            Decision::Rejected {
                reason: DecideError::NotFound,
            } => Err(ApplicationError::TaskNotFound {
                task_id: task_id.to_string(),
            }),
            Decision::Rejected {
                reason: DecideError::NotInvolved,
            } => Err(ApplicationError::NotPermitted {
                user_id: user_id.to_string(),
                task_id: task_id.to_string(),
            }),
        }
    }
}
