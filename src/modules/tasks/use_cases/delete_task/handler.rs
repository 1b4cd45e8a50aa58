use crate::modules::tasks::adapters::outbound::tasks::TaskRepository;
use crate::modules::tasks::use_cases::delete_task::command::DeleteTask;
use crate::modules::tasks::use_cases::delete_task::decide::decide_delete;
use crate::modules::tasks::use_cases::delete_task::decision::{DecideError, Decision};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use std::sync::Arc;

pub struct DeleteTaskHandler<TRepository>
where
    TRepository: TaskRepository + 'static,
{
    repository: Arc<TRepository>,
    task_locks: Arc<KeyedLocks>,
}

impl<TRepository> DeleteTaskHandler<TRepository>
where
    TRepository: TaskRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, task_locks: Arc<KeyedLocks>) -> Self {
        Self {
            repository,
            task_locks,
        }
    }

    pub async fn handle(&self, user_id: &str, task_id: &str) -> Result<(), ApplicationError> {
        let _guard = self.task_locks.lock(task_id).await;

        let current = self.repository.get(task_id).await?;
        let command = DeleteTask {
            task_id: task_id.to_string(),
            user_id: user_id.to_string(),
        };

        match decide_delete(current.as_ref(), command) {
            Decision::Accepted { task_id } => {
                self.repository.delete(&task_id).await?;
                tracing::info!(user_id, %task_id, "task deleted");
                Ok(())
            }
            Decision::Rejected {
                reason: DecideError::NotFound,
            } => Err(ApplicationError::TaskNotFound {
                task_id: task_id.to_string(),
            }),
            Decision::Rejected {
                reason: DecideError::NotCreator,
            } => Err(ApplicationError::NotPermitted {
                user_id: user_id.to_string(),
                task_id: task_id.to_string(),
            }),
        }
    }
}
