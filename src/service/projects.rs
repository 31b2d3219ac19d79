use log::info;
use sea_orm::{ActiveValue, IntoActiveModel, TransactionTrait};

use crate::entities::project;
use crate::error::TodoError;
use crate::repositories::{ProjectRepository, TaskRepository};
use crate::service::validators;
use crate::service::TodoService;

impl TodoService {
    /// Create a new project.
    ///
    /// Check order is part of the contract: the project-count limit is
    /// checked before field validation, which is checked before the
    /// duplicate-name lookup.
    pub async fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<project::Model, TodoError> {
        let count = ProjectRepository::count(&self.db).await?;
        if count as usize >= self.config.max_projects {
            return Err(TodoError::ProjectLimitExceeded(self.config.max_projects));
        }

        validators::validate_project_name(name, &self.config)?;
        if let Some(description) = description {
            validators::validate_project_description(description, &self.config)?;
        }

        if ProjectRepository::get_by_name(&self.db, name).await?.is_some() {
            return Err(TodoError::DuplicateProjectName(name.to_string()));
        }

        let project = ProjectRepository::create(&self.db, name, description).await?;
        info!("created project {} ('{}')", project.id, project.name);
        Ok(project)
    }

    /// Get a single project by id.
    pub async fn get_project(&self, id: &str) -> Result<Option<project::Model>, TodoError> {
        Ok(ProjectRepository::get(&self.db, id).await?)
    }

    /// List all projects, most recently created first.
    pub async fn list_projects(&self) -> Result<Vec<project::Model>, TodoError> {
        Ok(ProjectRepository::list(&self.db).await?)
    }

    /// Edit a project's name and/or description.
    ///
    /// `None` means "leave unchanged". A provided value is validated and
    /// assigned even when it equals the current one.
    pub async fn edit_project(
        &self,
        id: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<project::Model, TodoError> {
        let project = ProjectRepository::get(&self.db, id)
            .await?
            .ok_or_else(|| TodoError::ProjectNotFound(id.to_string()))?;

        if name.is_none() && description.is_none() {
            return Ok(project);
        }

        let mut active = project.into_active_model();

        if let Some(name) = name {
            validators::validate_project_name(name, &self.config)?;
            if let Some(existing) = ProjectRepository::get_by_name(&self.db, name).await? {
                if existing.id != id {
                    return Err(TodoError::DuplicateProjectName(name.to_string()));
                }
            }
            active.name = ActiveValue::Set(name.to_string());
        }

        if let Some(description) = description {
            validators::validate_project_description(description, &self.config)?;
            active.description = ActiveValue::Set(Some(description.to_string()));
        }

        let project = ProjectRepository::update(&self.db, active).await?;
        info!("updated project {}", project.id);
        Ok(project)
    }

    /// Delete a project and all of its tasks.
    ///
    /// Runs in one transaction so the cascade is never partially applied.
    pub async fn delete_project(&self, id: &str) -> Result<(), TodoError> {
        let project = ProjectRepository::get(&self.db, id)
            .await?
            .ok_or_else(|| TodoError::ProjectNotFound(id.to_string()))?;

        let txn = self.db.begin().await?;
        let removed = TaskRepository::delete_by_project(&txn, &project.id).await?;
        let project_id = project.id.clone();
        ProjectRepository::delete(&txn, project).await?;
        txn.commit().await?;

        info!("deleted project {project_id} and {removed} tasks");
        Ok(())
    }
}
