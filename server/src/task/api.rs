use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, patch},
};
use serde::Serialize;
use taskflow_core::{Task, TaskId, TaskInput, ValidationErrors};

use crate::store::TaskStore;
use crate::task::{TaskService, TaskServiceError};

/// Shared state handed to every task handler.
#[derive(Clone)]
pub struct TaskState {
    pub store: Arc<dyn TaskStore>,
}

/// JSON envelope for a single task.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    success: bool,
    data: Task,
}

impl TaskResponse {
    fn new(data: Task) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// JSON envelope for the task collection, with its size.
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    success: bool,
    count: usize,
    data: Vec<Task>,
}

/// JSON envelope confirming a deletion.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    success: bool,
    data: EmptyData,
}

#[derive(Debug, Serialize)]
struct EmptyData {}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    success: bool,
    error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

/// Error type for task handler operations, mapped onto HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The id path parameter is not a well-formed task id.
    #[error("Invalid task ID")]
    MalformedId,
    /// The submitted fields broke one or more validation rules.
    #[error("{0}")]
    Validation(ValidationErrors),
    /// No task exists under the requested id.
    #[error("Task not found")]
    NotFound,
    /// The store failed; details stay server-side.
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    /// Maps a service failure onto its HTTP form. Store failures are logged
    /// here, the only place that logs, before being collapsed into a
    /// generic 500.
    fn from_service(error: TaskServiceError) -> Self {
        match error {
            TaskServiceError::Validation(errors) => ApiError::Validation(errors),
            TaskServiceError::NotFound => ApiError::NotFound,
            TaskServiceError::Store(error) => {
                tracing::error!("Task store operation failed: {}", error);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MalformedId | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// Malformed ids are rejected here, so the service only sees typed ids.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse().map_err(|_| ApiError::MalformedId)
}

/// Handler for GET /tasks that lists every task, newest first.
#[tracing::instrument(skip(state))]
pub async fn list_tasks_handler(
    State(state): State<TaskState>,
) -> Result<Json<TaskListResponse>, ApiError> {
    let service = TaskService::new(state.store.as_ref());

    let tasks = service.list_all().await.map_err(ApiError::from_service)?;
    let count = tasks.len();

    Ok(Json(TaskListResponse {
        success: true,
        count,
        data: tasks,
    }))
}

/// Handler for GET /tasks/{id} that returns a single task.
#[tracing::instrument(skip(state))]
pub async fn get_task_handler(
    State(state): State<TaskState>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError> {
    let id = parse_task_id(&id)?;
    let service = TaskService::new(state.store.as_ref());

    let task = service
        .get_by_id(id)
        .await
        .map_err(ApiError::from_service)?;
    Ok(Json(TaskResponse::new(task)))
}

/// Handler for POST /tasks that validates and stores a new task.
#[tracing::instrument(skip(state))]
pub async fn create_task_handler(
    State(state): State<TaskState>,
    Json(input): Json<TaskInput>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let service = TaskService::new(state.store.as_ref());

    let task = service
        .create(input)
        .await
        .map_err(ApiError::from_service)?;
    Ok((StatusCode::CREATED, Json(TaskResponse::new(task))))
}

/// Handler for PUT /tasks/{id} that replaces the supplied fields.
#[tracing::instrument(skip(state))]
pub async fn update_task_handler(
    State(state): State<TaskState>,
    Path(id): Path<String>,
    Json(input): Json<TaskInput>,
) -> Result<Json<TaskResponse>, ApiError> {
    let id = parse_task_id(&id)?;
    let service = TaskService::new(state.store.as_ref());

    let task = service
        .update(id, input)
        .await
        .map_err(ApiError::from_service)?;
    Ok(Json(TaskResponse::new(task)))
}

/// Handler for PATCH /tasks/{id}/toggle that flips the task's status.
#[tracing::instrument(skip(state))]
pub async fn toggle_task_handler(
    State(state): State<TaskState>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError> {
    let id = parse_task_id(&id)?;
    let service = TaskService::new(state.store.as_ref());

    let task = service
        .toggle_status(id)
        .await
        .map_err(ApiError::from_service)?;
    Ok(Json(TaskResponse::new(task)))
}

/// Handler for DELETE /tasks/{id} that permanently removes a task.
#[tracing::instrument(skip(state))]
pub async fn delete_task_handler(
    State(state): State<TaskState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = parse_task_id(&id)?;
    let service = TaskService::new(state.store.as_ref());

    service.delete(id).await.map_err(ApiError::from_service)?;
    Ok(Json(DeletedResponse {
        success: true,
        data: EmptyData {},
    }))
}

/// Creates and returns the task router with all task routes.
pub fn create_task_router(state: TaskState) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/tasks/{id}",
            get(get_task_handler)
                .put(update_task_handler)
                .delete(delete_task_handler),
        )
        .route("/tasks/{id}/toggle", patch(toggle_task_handler))
        .with_state(state)
}
