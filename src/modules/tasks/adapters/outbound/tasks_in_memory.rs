use crate::modules::tasks::adapters::outbound::tasks::TaskRepository;
use crate::modules::tasks::core::task::Task;
use crate::shared::core::errors::RepositoryError;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTasks {
    rows: RwLock<HashMap<String, Task>>,
    is_offline: AtomicBool,
}

impl InMemoryTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::Backend("Task store offline".into()));
        }
        Ok(())
    }
}

fn not_found(id: &str) -> RepositoryError {
    RepositoryError::TaskNotFound {
        task_id: id.to_string(),
    }
}

#[async_trait::async_trait]
impl TaskRepository for InMemoryTasks {
    async fn insert(&self, task: Task) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.rows.write().await.insert(task.id.clone(), task);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Task>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn update(&self, task: Task) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let Some(stored) = guard.get_mut(&task.id) else {
            return Err(not_found(&task.id));
        };
        *stored = task;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        match self.rows.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<Task> = guard
            .values()
            .filter(|task| task.is_visible_to(user_id))
            .cloned()
            .collect();
        items.sort_by_key(|task| Reverse((task.created_at, task.id.clone())));
        Ok(items)
    }
}
