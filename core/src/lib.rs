//! Core domain model and validation rules for the taskflow task tracker.
pub mod task;

pub use task::validate::{FieldError, ValidationErrors, validate_new_task, validate_task_patch};
pub use task::{
    InvalidTaskId, ParseStatusError, Task, TaskDraft, TaskId, TaskInput, TaskPatch, TaskStatus,
};
