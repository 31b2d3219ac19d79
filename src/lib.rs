//! Todolist - a project and task management service
//!
//! This library implements a small relational todo system: projects owning
//! tasks, with a service layer enforcing the business rules (count limits,
//! field-length limits, status validation, duplicate-name checks, cascade
//! delete, overdue-task closing). The same service backs a REST API and an
//! interactive text menu.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Environment-driven application configuration
//! * [`entities`] - SeaORM entity models for database tables
//! * [`repositories`] - Repository layer for database operations
//! * [`storage`] - Database connectivity and schema bootstrap
//! * [`service`] - Business-rule service layer (the core)
//! * [`api`] - REST API over the service
//! * [`menu`] - Interactive text menu over the service

/// REST API router and handlers
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error types for service operations
pub mod error;

/// Interactive text menu
pub mod menu;

/// Repository layer for database operations
pub mod repositories;

/// Business-rule service layer
pub mod service;

/// Database connectivity and schema management
pub mod storage;

// Re-export the main types for convenient access
pub use config::Config;
pub use entities::{project, task, TaskStatus};
pub use error::TodoError;
pub use service::TodoService;
pub use storage::Storage;
