//! HTTP request handlers for task operations.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::entities::task;
use crate::error::TodoError;
use crate::service::TodoService;

/// Parse an RFC 3339 deadline from a request body.
fn parse_deadline(value: &str) -> Result<DateTime<Utc>, ApiError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            ApiError::BadRequest(format!(
                "Invalid deadline '{value}', expected an RFC 3339 timestamp"
            ))
        })
}

/// Request body for creating a task.
///
/// `status` travels as a plain string so the service-level status check is
/// the one that rejects unknown values.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub project_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub deadline: Option<String>,
}

/// Request body for updating a task. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub deadline: Option<String>,
}

/// Query parameters for listing tasks.
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default, alias = "projectId")]
    pub project_id: Option<String>,
}

/// Response body for the overdue sweep.
#[derive(Debug, Serialize)]
pub struct CloseOverdueResponse {
    #[serde(rename = "closedCount")]
    pub closed_count: u64,
}

pub async fn create_task(
    State(service): State<TodoService>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<task::Model>), ApiError> {
    let deadline = request.deadline.as_deref().map(parse_deadline).transpose()?;
    let task = service
        .create_task(
            &request.project_id,
            &request.title,
            request.description.as_deref(),
            request.status.as_deref(),
            deadline,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn list_tasks(
    State(service): State<TodoService>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<task::Model>>, ApiError> {
    Ok(Json(service.list_tasks(query.project_id.as_deref()).await?))
}

pub async fn get_task(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<Json<task::Model>, ApiError> {
    let task = service
        .get_task(&id)
        .await?
        .ok_or(TodoError::TaskNotFound(id))?;
    Ok(Json(task))
}

pub async fn update_task(
    State(service): State<TodoService>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<task::Model>, ApiError> {
    let deadline = request.deadline.as_deref().map(parse_deadline).transpose()?;
    let task = service
        .edit_task(
            &id,
            request.title.as_deref(),
            request.description.as_deref(),
            request.status.as_deref(),
            deadline,
        )
        .await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_task(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn close_overdue(
    State(service): State<TodoService>,
) -> Result<Json<CloseOverdueResponse>, ApiError> {
    let closed_count = service.close_overdue_tasks().await?;
    Ok(Json(CloseOverdueResponse { closed_count }))
}
