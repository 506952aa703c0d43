use async_trait::async_trait;
use taskflow_core::{Task, TaskDraft, TaskId, TaskPatch};

pub mod memory;

pub use memory::MemoryTaskStore;

/// Errors that can occur in the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or failed mid-operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction the task service relies on for durability.
///
/// Implementations assign identifiers and creation timestamps on insert and
/// refresh the update timestamp on every mutation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new record built from the draft, assigning id and timestamps.
    async fn insert(&self, draft: TaskDraft) -> Result<Task, StoreError>;

    /// Returns the record with the given id, if any.
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, StoreError>;

    /// Returns every record, newest first by creation time.
    async fn find_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Applies the patch to the record with the given id, refreshing its
    /// update timestamp. Returns `None` if no record has that id.
    async fn update_by_id(&self, id: TaskId, patch: TaskPatch) -> Result<Option<Task>, StoreError>;

    /// Removes the record with the given id, returning it if it existed.
    async fn delete_by_id(&self, id: TaskId) -> Result<Option<Task>, StoreError>;
}
