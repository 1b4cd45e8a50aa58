use crate::modules::tasks::adapters::outbound::tasks::TaskRepository;
use crate::modules::tasks::core::task::Task;
use crate::shared::core::errors::ApplicationError;
use std::sync::Arc;

pub struct ListTasksHandler<TRepository>
where
    TRepository: TaskRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ListTasksHandler<TRepository>
where
    TRepository: TaskRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Created by or assigned to the user, newest first.
    pub async fn handle(&self, user_id: &str) -> Result<Vec<Task>, ApplicationError> {
        Ok(self.repository.list_for_user(user_id).await?)
    }
}
