use chrono::{DateTime, Utc};
use log::info;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter};

use crate::entities::task;
use crate::entities::task::TaskStatus;
use crate::error::TodoError;
use crate::repositories::{ProjectRepository, TaskRepository};
use crate::service::validators;
use crate::service::TodoService;

impl TodoService {
    /// Create a new task under a project.
    ///
    /// Check order is part of the contract: project existence, then the
    /// per-project task limit, then title, description and status validation.
    pub async fn create_task(
        &self,
        project_id: &str,
        title: &str,
        description: Option<&str>,
        status: Option<&str>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<task::Model, TodoError> {
        let project = ProjectRepository::get(&self.db, project_id)
            .await?
            .ok_or_else(|| TodoError::ProjectNotFound(project_id.to_string()))?;

        let count = TaskRepository::count_by_project(&self.db, &project.id).await?;
        if count as usize >= self.config.max_tasks_per_project {
            return Err(TodoError::TaskLimitExceeded(self.config.max_tasks_per_project));
        }

        validators::validate_task_title(title, &self.config)?;
        if let Some(description) = description {
            validators::validate_task_description(description, &self.config)?;
        }
        let status = match status {
            Some(value) => validators::parse_status(value)?,
            None => TaskStatus::default(),
        };

        let task =
            TaskRepository::create(&self.db, &project.id, title, description, status, deadline)
                .await?;
        info!("created task {} in project {}", task.id, project.id);
        Ok(task)
    }

    /// Get a single task by id.
    pub async fn get_task(&self, id: &str) -> Result<Option<task::Model>, TodoError> {
        Ok(TaskRepository::get(&self.db, id).await?)
    }

    /// List tasks, most recently created first, optionally for one project.
    pub async fn list_tasks(&self, project_id: Option<&str>) -> Result<Vec<task::Model>, TodoError> {
        Ok(TaskRepository::list(&self.db, project_id).await?)
    }

    /// Edit a task's fields.
    ///
    /// Each provided field is validated and assigned independently; `None`
    /// means "leave unchanged". Deadline assignment is unconditional - any
    /// timestamp is accepted, including past dates.
    pub async fn edit_task(
        &self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
        status: Option<&str>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<task::Model, TodoError> {
        let task = TaskRepository::get(&self.db, id)
            .await?
            .ok_or_else(|| TodoError::TaskNotFound(id.to_string()))?;

        if title.is_none() && description.is_none() && status.is_none() && deadline.is_none() {
            return Ok(task);
        }

        let mut active = task.into_active_model();

        if let Some(title) = title {
            validators::validate_task_title(title, &self.config)?;
            active.title = ActiveValue::Set(title.to_string());
        }
        if let Some(description) = description {
            validators::validate_task_description(description, &self.config)?;
            active.description = ActiveValue::Set(Some(description.to_string()));
        }
        if let Some(status) = status {
            active.status = ActiveValue::Set(validators::parse_status(status)?);
        }
        if let Some(deadline) = deadline {
            active.deadline = ActiveValue::Set(Some(deadline));
        }

        let task = TaskRepository::update(&self.db, active).await?;
        info!("updated task {}", task.id);
        Ok(task)
    }

    /// Delete a task.
    pub async fn delete_task(&self, id: &str) -> Result<(), TodoError> {
        let task = TaskRepository::get(&self.db, id)
            .await?
            .ok_or_else(|| TodoError::TaskNotFound(id.to_string()))?;

        let task_id = task.id.clone();
        TaskRepository::delete(&self.db, task).await?;
        info!("deleted task {task_id}");
        Ok(())
    }

    /// Mark every overdue task as done and return how many changed.
    ///
    /// The current time is read once, so all matching rows observe the same
    /// cutoff, and the sweep is a single UPDATE statement, so it is atomic.
    /// Running it again without new overdue tasks changes nothing.
    pub async fn close_overdue_tasks(&self) -> Result<u64, TodoError> {
        let now = Utc::now();

        let result = task::Entity::update_many()
            .col_expr(task::Column::Status, Expr::value(TaskStatus::Done))
            .filter(task::Column::Deadline.is_not_null())
            .filter(task::Column::Deadline.lt(now))
            .filter(task::Column::Status.ne(TaskStatus::Done))
            .exec(&self.db)
            .await?;

        info!("closed {} overdue tasks", result.rows_affected);
        Ok(result.rows_affected)
    }
}
