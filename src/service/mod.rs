//! Business-rule service module for the todolist application.
//!
//! This module provides the [`TodoService`] struct which mediates between the
//! outer interfaces (REST API, interactive menu) and storage. It owns all of
//! the branching business logic in the system:
//! - Count limits (projects overall, tasks per project)
//! - Field validation (lengths, blank names, status values)
//! - Duplicate project name checks
//! - Referential existence checks and cascade delete
//! - The overdue-task sweep
//!
//! Operations run within one storage call scope each; the service keeps no
//! state across calls beyond the immutable configuration and the connection
//! pool handle.

pub mod projects;
pub mod tasks;
pub mod validators;

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Service enforcing project/task lifecycle rules on top of the repositories.
///
/// Cloning is cheap: the database handle is a pooled connection reference and
/// the configuration is a small immutable value.
#[derive(Clone)]
pub struct TodoService {
    pub(crate) db: DatabaseConnection,
    pub(crate) config: Config,
}

impl TodoService {
    /// Create a service over an open database connection.
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self { db, config }
    }

    /// The configuration this service enforces.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
