//! Remote task API abstraction for the client.
//!
//! The board only ever talks to the server through the [`TasksApi`] trait,
//! so any transport (or a mock in tests) can stand behind it.

use mockall::automock;
use taskflow_core::{Task, TaskId, TaskInput};
use thiserror::Error;

/// Errors a remote task call can end in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with `success: false` and explained why.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed; the server could not be reached or the
    /// call ran past its time limit.
    #[error("network failure: {0}")]
    Unreachable(String),
}

/// Trait for the remote calls the task board issues.
///
/// One method per server route the client drives. Every call resolves
/// exactly once; there are no retries at this layer.
#[automock]
pub trait TasksApi {
    /// Fetches the whole task collection, newest first.
    async fn list(&self) -> Result<Vec<Task>, ApiError>;
    /// Submits a new task and returns the record the server stored.
    async fn create(&self, input: TaskInput) -> Result<Task, ApiError>;
    /// Replaces the supplied fields of an existing task.
    async fn update(&self, id: TaskId, input: TaskInput) -> Result<Task, ApiError>;
    /// Flips the task's status and returns the updated record.
    async fn toggle(&self, id: TaskId) -> Result<Task, ApiError>;
    /// Permanently removes a task.
    async fn delete(&self, id: TaskId) -> Result<(), ApiError>;
}
