//! Configuration management.
//!
//! All settings are read from the environment once at process start and kept
//! immutable for the lifetime of the service. The configuration is passed
//! explicitly into [`crate::service::TodoService::new`]; there is no global
//! singleton.

use anyhow::{Context, Result};

use crate::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_MAX_PROJECTS, DEFAULT_MAX_PROJECT_DESC_LENGTH,
    DEFAULT_MAX_PROJECT_NAME_LENGTH, DEFAULT_MAX_TASKS_PER_PROJECT,
    DEFAULT_MAX_TASK_DESC_LENGTH, DEFAULT_MAX_TASK_NAME_LENGTH,
};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of projects that may exist at once.
    pub max_projects: usize,
    /// Maximum project name length, in characters.
    pub max_project_name_length: usize,
    /// Maximum project description length, in characters.
    pub max_project_desc_length: usize,
    /// Maximum number of tasks per project.
    pub max_tasks_per_project: usize,
    /// Maximum task title length, in characters.
    pub max_task_name_length: usize,
    /// Maximum task description length, in characters.
    pub max_task_desc_length: usize,
    /// Database connection URL.
    pub database_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_projects: DEFAULT_MAX_PROJECTS,
            max_project_name_length: DEFAULT_MAX_PROJECT_NAME_LENGTH,
            max_project_desc_length: DEFAULT_MAX_PROJECT_DESC_LENGTH,
            max_tasks_per_project: DEFAULT_MAX_TASKS_PER_PROJECT,
            max_task_name_length: DEFAULT_MAX_TASK_NAME_LENGTH,
            max_task_desc_length: DEFAULT_MAX_TASK_DESC_LENGTH,
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// A variable that is set but not a valid integer is a startup error,
    /// not a silent fallback.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            max_projects: env_usize("MAX_PROJECTS", DEFAULT_MAX_PROJECTS)?,
            max_project_name_length: env_usize(
                "MAX_PROJECT_NAME_LENGTH",
                DEFAULT_MAX_PROJECT_NAME_LENGTH,
            )?,
            max_project_desc_length: env_usize(
                "MAX_PROJECT_DESC_LENGTH",
                DEFAULT_MAX_PROJECT_DESC_LENGTH,
            )?,
            max_tasks_per_project: env_usize(
                "MAX_TASKS_PER_PROJECT",
                DEFAULT_MAX_TASKS_PER_PROJECT,
            )?,
            max_task_name_length: env_usize("MAX_TASK_NAME_LENGTH", DEFAULT_MAX_TASK_NAME_LENGTH)?,
            max_task_desc_length: env_usize("MAX_TASK_DESC_LENGTH", DEFAULT_MAX_TASK_DESC_LENGTH)?,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        })
    }
}

fn env_usize(key: &str, default: usize) -> Result<usize> {
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{key} must be an integer, got '{value}'")),
        Err(_) => Ok(default),
    }
}
