//! Constants used throughout the application
//!
//! This module centralizes configuration defaults and user-facing menu text
//! to improve maintainability and consistency.

// Configuration defaults (overridable via environment, see `crate::config`)
pub const DEFAULT_MAX_PROJECTS: usize = 10;
pub const DEFAULT_MAX_PROJECT_NAME_LENGTH: usize = 30;
pub const DEFAULT_MAX_PROJECT_DESC_LENGTH: usize = 150;
pub const DEFAULT_MAX_TASKS_PER_PROJECT: usize = 20;
pub const DEFAULT_MAX_TASK_NAME_LENGTH: usize = 30;
pub const DEFAULT_MAX_TASK_DESC_LENGTH: usize = 150;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todolist.db?mode=rwc";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

// Success Messages
pub const SUCCESS_PROJECT_CREATED: &str = "✅ Project created";
pub const SUCCESS_PROJECT_UPDATED: &str = "✅ Project updated";
pub const SUCCESS_PROJECT_DELETED: &str = "✅ Project deleted";
pub const SUCCESS_TASK_CREATED: &str = "✅ Task created";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_STATUS_CHANGED: &str = "✅ Task status changed";

// Error Messages
pub const ERROR_INVALID_CHOICE: &str = "❌ Invalid choice! Please try again.";
pub const ERROR_INVALID_NUMBER: &str = "❌ Please enter a valid number!";
pub const ERROR_NO_PROJECTS: &str = "📝 No projects found!";
pub const ERROR_NO_TASKS: &str = "📝 No tasks found!";

// Warnings
pub const WARN_BAD_DEADLINE: &str = "⚠️ Invalid date format! Continuing without deadline.";
