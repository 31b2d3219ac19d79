//! HTTP request handlers for project operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::entities::project;
use crate::error::TodoError;
use crate::service::TodoService;

/// Request body for creating a project.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Request body for updating a project. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn create_project(
    State(service): State<TodoService>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<project::Model>), ApiError> {
    let project = service
        .create_project(&request.name, request.description.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn list_projects(
    State(service): State<TodoService>,
) -> Result<Json<Vec<project::Model>>, ApiError> {
    Ok(Json(service.list_projects().await?))
}

pub async fn get_project(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<Json<project::Model>, ApiError> {
    let project = service
        .get_project(&id)
        .await?
        .ok_or(TodoError::ProjectNotFound(id))?;
    Ok(Json(project))
}

pub async fn update_project(
    State(service): State<TodoService>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<project::Model>, ApiError> {
    let project = service
        .edit_project(&id, request.name.as_deref(), request.description.as_deref())
        .await?;
    Ok(Json(project))
}

pub async fn delete_project(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_project(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
