//! Storage module for database connectivity and schema management.
//!
//! Provides the [`Storage`] handle that owns the SeaORM connection pool and
//! creates the `projects` and `tasks` tables on startup.

pub mod db;

pub use db::{init_schema, Storage};
