//! Task repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entities::task;
use crate::entities::task::TaskStatus;

/// Repository for task-related database operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Insert a new task under a project with a fresh identifier and creation timestamp.
    pub async fn create<C>(
        conn: &C,
        project_id: &str,
        title: &str,
        description: Option<&str>,
        status: TaskStatus,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<task::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = task::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now()),
            deadline: ActiveValue::Set(deadline),
            project_id: ActiveValue::Set(project_id.to_string()),
        };
        model.insert(conn).await
    }

    /// Get a single task by id.
    pub async fn get<C>(conn: &C, id: &str) -> Result<Option<task::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        task::Entity::find_by_id(id).one(conn).await
    }

    /// Get tasks, most recently created first, optionally restricted to one project.
    pub async fn list<C>(conn: &C, project_id: Option<&str>) -> Result<Vec<task::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut query = task::Entity::find().order_by_desc(task::Column::CreatedAt);
        if let Some(project_id) = project_id {
            query = query.filter(task::Column::ProjectId.eq(project_id));
        }
        query.all(conn).await
    }

    /// Count the tasks owned by a project.
    pub async fn count_by_project<C>(conn: &C, project_id: &str) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        task::Entity::find()
            .filter(task::Column::ProjectId.eq(project_id))
            .count(conn)
            .await
    }

    /// Update a task in the database.
    pub async fn update<C>(conn: &C, task: task::ActiveModel) -> Result<task::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        task.update(conn).await
    }

    /// Delete a task from the database.
    pub async fn delete<C>(conn: &C, task: task::Model) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        task.delete(conn).await?;
        Ok(())
    }

    /// Delete every task owned by a project. Used inside the cascade-delete transaction.
    pub async fn delete_by_project<C>(conn: &C, project_id: &str) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = task::Entity::delete_many()
            .filter(task::Column::ProjectId.eq(project_id))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }
}
