//! Validation rules shared by every write path.
//!
//! Each field reports the first rule it breaks; failures across fields are
//! collected into one [`ValidationErrors`] report rather than stopping at
//! the first bad field.
use std::fmt;

use thiserror::Error;

use super::{TaskDraft, TaskInput, TaskPatch, TaskStatus};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Title cannot be empty")]
    TitleEmpty,
    #[error("Title must be at least 3 characters")]
    TitleTooShort,
    #[error("Title cannot exceed 100 characters")]
    TitleTooLong,
    #[error("Description cannot exceed 500 characters")]
    DescriptionTooLong,
    #[error("Status must be pending or completed")]
    StatusUnknown,
}

/// Every field rejection found in one candidate input, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks a candidate against the create rules and normalizes it into a
/// draft: title and description trimmed, description defaulting to empty,
/// status defaulting to pending.
pub fn validate_new_task(input: &TaskInput) -> Result<TaskDraft, ValidationErrors> {
    let mut errors = Vec::new();

    let title = input.title.as_deref().map(str::trim).unwrap_or("");
    if title.is_empty() {
        errors.push(FieldError::TitleRequired);
    } else if let Err(error) = check_title_length(title) {
        errors.push(error);
    }

    let description = input.description.as_deref().map(str::trim).unwrap_or("");
    if description.chars().count() > 500 {
        errors.push(FieldError::DescriptionTooLong);
    }

    let status = match input.status.as_deref() {
        None => TaskStatus::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            errors.push(FieldError::StatusUnknown);
            TaskStatus::default()
        }),
    };

    if errors.is_empty() {
        Ok(TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            status,
        })
    } else {
        Err(ValidationErrors { errors })
    }
}

/// Checks only the fields present in the candidate and normalizes them into
/// a patch. A title supplied for an update may not be blank.
pub fn validate_task_patch(input: &TaskInput) -> Result<TaskPatch, ValidationErrors> {
    let mut errors = Vec::new();
    let mut patch = TaskPatch::default();

    if let Some(raw) = input.title.as_deref() {
        let title = raw.trim();
        if title.is_empty() {
            errors.push(FieldError::TitleEmpty);
        } else {
            match check_title_length(title) {
                Ok(()) => patch.title = Some(title.to_string()),
                Err(error) => errors.push(error),
            }
        }
    }

    if let Some(raw) = input.description.as_deref() {
        let description = raw.trim();
        if description.chars().count() > 500 {
            errors.push(FieldError::DescriptionTooLong);
        } else {
            patch.description = Some(description.to_string());
        }
    }

    if let Some(raw) = input.status.as_deref() {
        match raw.parse::<TaskStatus>() {
            Ok(status) => patch.status = Some(status),
            Err(_) => errors.push(FieldError::StatusUnknown),
        }
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors { errors })
    }
}

// Length limits count characters, not bytes.
fn check_title_length(title: &str) -> Result<(), FieldError> {
    let length = title.chars().count();
    if length < 3 {
        Err(FieldError::TitleTooShort)
    } else if length > 100 {
        Err(FieldError::TitleTooLong)
    } else {
        Ok(())
    }
}
