//! Owned state container for the task collection a view renders from.

use taskflow_core::{Task, TaskId, TaskInput, TaskStatus};

use crate::api::TasksApi;

/// Which slice of the collection a view wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

/// Counts derived from the current collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Client-side task state with an injected remote api.
///
/// The board never mutates optimistically: the collection changes only after
/// the api confirms a call, and a failed call leaves it untouched with the
/// error message recorded in place. Counts and filtered views are derived on
/// demand, never stored.
pub struct TaskBoard<A: TasksApi> {
    api: A,
    tasks: Vec<Task>,
    loading: bool,
    last_error: Option<String>,
}

impl<A: TasksApi> TaskBoard<A> {
    /// Creates an empty board that reports loading until the first refresh.
    pub fn new(api: A) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            loading: true,
            last_error: None,
        }
    }

    /// The current collection, in the order the server returned it.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The message of the most recent failed call, until a later call
    /// succeeds.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the whole collection from the server.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.last_error = None;
        match self.api.list().await {
            Ok(tasks) => self.tasks = tasks,
            Err(error) => self.last_error = Some(error.to_string()),
        }
        self.loading = false;
    }

    /// Submits a new task and prepends it on success. The returned flag
    /// tells the caller whether an open form can close.
    pub async fn create(&mut self, input: TaskInput) -> bool {
        match self.api.create(input).await {
            Ok(task) => {
                self.tasks.insert(0, task);
                self.confirm()
            }
            Err(error) => self.record(error),
        }
    }

    /// Updates a task and replaces the matching entry on success.
    pub async fn update(&mut self, id: TaskId, input: TaskInput) -> bool {
        match self.api.update(id, input).await {
            Ok(task) => {
                self.replace(task);
                self.confirm()
            }
            Err(error) => self.record(error),
        }
    }

    /// Flips a task's status and replaces the matching entry on success.
    pub async fn toggle(&mut self, id: TaskId) -> bool {
        match self.api.toggle(id).await {
            Ok(task) => {
                self.replace(task);
                self.confirm()
            }
            Err(error) => self.record(error),
        }
    }

    /// Deletes a task and removes the matching entry on success.
    pub async fn delete(&mut self, id: TaskId) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                self.tasks.retain(|task| task.id != id);
                self.confirm()
            }
            Err(error) => self.record(error),
        }
    }

    /// Counts the collection by status.
    pub fn stats(&self) -> TaskStats {
        let completed = self
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .count();
        TaskStats {
            total: self.tasks.len(),
            pending: self.tasks.len() - completed,
            completed,
        }
    }

    /// The tasks a view should show: filtered by status, then searched
    /// case-insensitively against title and description. A blank search
    /// matches everything.
    pub fn visible_tasks(&self, filter: StatusFilter, search: &str) -> Vec<&Task> {
        let needle = search.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| match filter {
                StatusFilter::All => true,
                StatusFilter::Pending => task.status == TaskStatus::Pending,
                StatusFilter::Completed => task.status == TaskStatus::Completed,
            })
            .filter(|task| {
                search.trim().is_empty()
                    || task.title.to_lowercase().contains(&needle)
                    || task.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn replace(&mut self, updated: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|task| task.id == updated.id) {
            *slot = updated;
        }
    }

    fn confirm(&mut self) -> bool {
        self.last_error = None;
        true
    }

    fn record(&mut self, error: crate::api::ApiError) -> bool {
        self.last_error = Some(error.to_string());
        false
    }
}
