//! Project repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entities::project;

/// Repository for project-related database operations.
pub struct ProjectRepository;

impl ProjectRepository {
    /// Insert a new project with a fresh identifier and creation timestamp.
    pub async fn create<C>(conn: &C, name: &str, description: Option<&str>) -> Result<project::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = project::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now()),
        };
        model.insert(conn).await
    }

    /// Get a single project by id.
    pub async fn get<C>(conn: &C, id: &str) -> Result<Option<project::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        project::Entity::find_by_id(id).one(conn).await
    }

    /// Get a single project by its exact name.
    pub async fn get_by_name<C>(conn: &C, name: &str) -> Result<Option<project::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        project::Entity::find()
            .filter(project::Column::Name.eq(name))
            .one(conn)
            .await
    }

    /// Get all projects, most recently created first.
    pub async fn list<C>(conn: &C) -> Result<Vec<project::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        project::Entity::find()
            .order_by_desc(project::Column::CreatedAt)
            .all(conn)
            .await
    }

    /// Count all projects.
    pub async fn count<C>(conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        project::Entity::find().count(conn).await
    }

    /// Update a project in the database.
    pub async fn update<C>(conn: &C, project: project::ActiveModel) -> Result<project::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        project.update(conn).await
    }

    /// Delete a project from the database.
    pub async fn delete<C>(conn: &C, project: project::Model) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        project.delete(conn).await?;
        Ok(())
    }
}
