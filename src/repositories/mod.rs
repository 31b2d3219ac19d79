//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Repositories keep entities as pure data models while providing reusable
//! database access methods. All methods are generic over [`sea_orm::ConnectionTrait`]
//! so they run equally against the connection pool or an open transaction.

pub mod project;
pub mod task;

pub use project::ProjectRepository;
pub use task::TaskRepository;
