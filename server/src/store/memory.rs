use async_trait::async_trait;
use chrono::Utc;
use taskflow_core::{Task, TaskDraft, TaskId, TaskPatch};
use tokio::sync::RwLock;

use crate::store::{StoreError, TaskStore};

/// In-memory document collection, the store implementation this server ships.
///
/// Records are kept in insertion order behind a single lock. Listing sorts by
/// creation time, newest first, and keeps later inserts ahead on ties.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn insert(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        let task = Task::new(TaskId::generate(), draft, Utc::now());
        self.tasks.write().await.push(task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Task>, StoreError> {
        let tasks = self.tasks.read().await;
        let mut all: Vec<Task> = tasks.iter().rev().cloned().collect();
        // Stable sort, so reverse insertion order decides equal timestamps.
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update_by_id(&self, id: TaskId, patch: TaskPatch) -> Result<Option<Task>, StoreError> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.apply(patch, Utc::now());
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter().position(|task| task.id == id) {
            Some(index) => Ok(Some(tasks.remove(index))),
            None => Ok(None),
        }
    }
}
