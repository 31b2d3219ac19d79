//! Pure field validators.
//!
//! Stateless checks applied before any mutation is committed. Each function
//! reports the first violated constraint as a [`TodoError`].

use crate::config::Config;
use crate::entities::task::TaskStatus;
use crate::error::TodoError;

pub fn validate_project_name(name: &str, config: &Config) -> Result<(), TodoError> {
    if name.trim().is_empty() {
        return Err(TodoError::EmptyField("Project name"));
    }
    if name.chars().count() > config.max_project_name_length {
        return Err(TodoError::FieldTooLong {
            field: "Project name",
            max: config.max_project_name_length,
        });
    }
    Ok(())
}

pub fn validate_project_description(description: &str, config: &Config) -> Result<(), TodoError> {
    if description.chars().count() > config.max_project_desc_length {
        return Err(TodoError::FieldTooLong {
            field: "Project description",
            max: config.max_project_desc_length,
        });
    }
    Ok(())
}

pub fn validate_task_title(title: &str, config: &Config) -> Result<(), TodoError> {
    if title.trim().is_empty() {
        return Err(TodoError::EmptyField("Task title"));
    }
    if title.chars().count() > config.max_task_name_length {
        return Err(TodoError::FieldTooLong {
            field: "Task title",
            max: config.max_task_name_length,
        });
    }
    Ok(())
}

pub fn validate_task_description(description: &str, config: &Config) -> Result<(), TodoError> {
    if description.chars().count() > config.max_task_desc_length {
        return Err(TodoError::FieldTooLong {
            field: "Task description",
            max: config.max_task_desc_length,
        });
    }
    Ok(())
}

/// Parse a status string into its enum value.
pub fn parse_status(status: &str) -> Result<TaskStatus, TodoError> {
    match status {
        "todo" => Ok(TaskStatus::Todo),
        "in_progress" => Ok(TaskStatus::InProgress),
        "done" => Ok(TaskStatus::Done),
        other => Err(TodoError::InvalidStatus(other.to_string())),
    }
}
