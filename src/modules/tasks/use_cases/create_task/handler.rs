use crate::modules::tasks::adapters::outbound::tasks::TaskRepository;
use crate::modules::tasks::core::task::{Task, TaskDetails};
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::modules::tasks::use_cases::create_task::decide::decide_create;
use crate::modules::tasks::use_cases::create_task::decision::Decision;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateTaskHandler<TRepository>
where
    TRepository: TaskRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> CreateTaskHandler<TRepository>
where
    TRepository: TaskRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        user_id: &str,
        details: TaskDetails,
    ) -> Result<Task, ApplicationError> {
        let command = CreateTask {
            task_id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            details,
            created_at: self.clock.now(),
        };

        match decide_create(command) {
            Decision::Accepted { task } => {
                self.repository.insert(task.clone()).await?;
                tracing::info!(user_id, task_id = %task.id, "task created");
                Ok(task)
            }
            Decision::Rejected { reason } => Err(ApplicationError::InvalidInput(reason.to_string())),
        }
    }
}
