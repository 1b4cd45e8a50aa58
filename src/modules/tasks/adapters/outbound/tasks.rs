use crate::modules::tasks::core::task::Task;
use crate::shared::core::errors::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn insert(&self, task: Task) -> Result<(), RepositoryError>;

    async fn get(&self, id: &str) -> Result<Option<Task>, RepositoryError>;

    /// Replaces a stored task. A missing id is `TaskNotFound`.
    async fn update(&self, task: Task) -> Result<(), RepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Tasks the user created or is assigned to, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, RepositoryError>;
}
