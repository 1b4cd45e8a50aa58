use crate::modules::tasks::adapters::outbound::tasks::TaskRepository;
use crate::modules::tasks::core::task::{Task, TaskDetails};
use crate::modules::tasks::use_cases::update_task::command::UpdateTask;
use crate::modules::tasks::use_cases::update_task::decide::decide_update;
use crate::modules::tasks::use_cases::update_task::decision::{DecideError, Decision};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use std::sync::Arc;

pub struct UpdateTaskHandler<TRepository>
where
    TRepository: TaskRepository + 'static,
{
    repository: Arc<TRepository>,
    task_locks: Arc<KeyedLocks>,
}

impl<TRepository> UpdateTaskHandler<TRepository>
where
    TRepository: TaskRepository + 'static,
{
    /// `task_locks` must be shared with the toggle and delete handlers.
    pub fn new(repository: Arc<TRepository>, task_locks: Arc<KeyedLocks>) -> Self {
        Self {
            repository,
            task_locks,
        }
    }

    pub async fn handle(
        &self,
        user_id: &str,
        task_id: &str,
        details: TaskDetails,
    ) -> Result<Task, ApplicationError> {
        let _guard = self.task_locks.lock(task_id).await;

        let current = self.repository.get(task_id).await?;
        let command = UpdateTask {
            task_id: task_id.to_string(),
            user_id: user_id.to_string(),
            details,
        };

        match decide_update(current, command) {
            Decision::Accepted { task } => {
                self.repository.update(task.clone()).await?;
                tracing::info!(user_id, task_id, "task updated");
                Ok(task)
            }
            Decision::Rejected { reason } => Err(match reason {
                DecideError::NotFound => ApplicationError::TaskNotFound {
                    task_id: task_id.to_string(),
                },
                DecideError::NotCreator => ApplicationError::NotPermitted {
                    user_id: user_id.to_string(),
                    task_id: task_id.to_string(),
                },
                DecideError::EmptyTitle => {
                    ApplicationError::InvalidInput(DecideError::EmptyTitle.to_string())
                }
            }),
        }
    }
}
