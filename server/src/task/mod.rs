use taskflow_core::{
    Task, TaskId, TaskInput, TaskPatch, ValidationErrors, validate_new_task, validate_task_patch,
};

use crate::store::{StoreError, TaskStore};

pub mod api;

/// Error type for TaskService operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// The submitted fields broke one or more validation rules.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    /// No task exists under the requested id.
    #[error("Task not found")]
    NotFound,
    /// The backing store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub struct TaskService<'a> {
    store: &'a dyn TaskStore,
}

impl<'a> TaskService<'a> {
    pub fn new(store: &'a dyn TaskStore) -> Self {
        Self { store }
    }

    /// Retrieves every task, newest first by creation time.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Task>, TaskServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// Retrieves a single task by its id.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: TaskId) -> Result<Task, TaskServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound)
    }

    /// Validates the candidate fields and stores them as a new task.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, input: TaskInput) -> Result<Task, TaskServiceError> {
        let draft = validate_new_task(&input)?;
        Ok(self.store.insert(draft).await?)
    }

    /// Validates the supplied fields and replaces them on the stored task.
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, id: TaskId, input: TaskInput) -> Result<Task, TaskServiceError> {
        let patch = validate_task_patch(&input)?;
        self.store
            .update_by_id(id, patch)
            .await?
            .ok_or(TaskServiceError::NotFound)
    }

    /// Flips the task's status between pending and completed.
    ///
    /// The new value is computed from the stored record, never taken from
    /// the caller.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_status(&self, id: TaskId) -> Result<Task, TaskServiceError> {
        let task = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound)?;

        let patch = TaskPatch {
            status: Some(task.status.toggled()),
            ..TaskPatch::default()
        };
        self.store
            .update_by_id(id, patch)
            .await?
            .ok_or(TaskServiceError::NotFound)
    }

    /// Permanently removes a task, returning the removed record.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: TaskId) -> Result<Task, TaskServiceError> {
        self.store
            .delete_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::*;
    use taskflow_core::{TaskDraft, TaskStatus};

    use super::*;
    use crate::store::MockTaskStore;

    fn stored_task(id: TaskId, status: TaskStatus) -> Task {
        let draft = TaskDraft {
            title: "Buy milk".to_string(),
            description: String::new(),
            status,
        };
        Task::new(id, draft, Utc::now())
    }

    #[tokio::test]
    async fn toggle_writes_the_flip_of_the_stored_status() {
        let mut store = MockTaskStore::new();
        let id = TaskId::generate();
        let current = stored_task(id, TaskStatus::Completed);
        let flipped = stored_task(id, TaskStatus::Pending);

        store
            .expect_find_by_id()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(Some(current.clone())));
        store
            .expect_update_by_id()
            .with(
                eq(id),
                eq(TaskPatch {
                    status: Some(TaskStatus::Pending),
                    ..TaskPatch::default()
                }),
            )
            .times(1)
            .returning(move |_, _| Ok(Some(flipped.clone())));

        let service = TaskService::new(&store);
        let result = service.toggle_status(id).await.unwrap();

        assert_eq!(result.status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_before_touching_the_store() {
        let store = MockTaskStore::new();
        let service = TaskService::new(&store);

        let result = service.create(TaskInput::default()).await;

        let error = result.unwrap_err();
        assert!(matches!(error, TaskServiceError::Validation(_)));
        assert_eq!(error.to_string(), "Title is required");
    }

    #[tokio::test]
    async fn get_by_id_maps_a_missing_record_to_not_found() {
        let mut store = MockTaskStore::new();
        let id = TaskId::generate();
        store
            .expect_find_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(None));

        let service = TaskService::new(&store);
        let result = service.get_by_id(id).await;

        let error = result.unwrap_err();
        assert!(matches!(error, TaskServiceError::NotFound));
        assert_eq!(error.to_string(), "Task not found");
    }

    #[tokio::test]
    async fn store_failures_surface_as_store_errors() {
        let mut store = MockTaskStore::new();
        store
            .expect_find_all()
            .times(1)
            .returning(|| Err(StoreError::Unavailable("connection reset".to_string())));

        let service = TaskService::new(&store);
        let result = service.list_all().await;

        assert!(matches!(result.unwrap_err(), TaskServiceError::Store(_)));
    }
}
