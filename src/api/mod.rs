//! HTTP API layer providing REST endpoints over [`TodoService`].
//!
//! Routes mirror the service operations one-to-one; all business logic stays
//! in the service. Lookup failures map to 404, storage faults to 500, every
//! other rule rejection to 400.

pub mod projects;
pub mod tasks;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;

use crate::error::TodoError;
use crate::service::TodoService;

/// Build the application router.
pub fn router(service: TodoService) -> Router {
    Router::new()
        .route(
            "/projects",
            post(projects::create_project).get(projects::list_projects),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/tasks", post(tasks::create_task).get(tasks::list_tasks))
        .route("/tasks/close-overdue", post(tasks::close_overdue))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .with_state(service)
}

/// Bind and serve the REST API until the process is stopped.
pub async fn serve(service: TodoService, addr: &str) -> anyhow::Result<()> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Error wrapper that renders service errors as HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Todo(TodoError),
    BadRequest(String),
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        ApiError::Todo(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Todo(err) => {
                let status = if err.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if matches!(err, TodoError::Storage(_)) {
                    StatusCode::INTERNAL_SERVER_ERROR
                } else {
                    StatusCode::BAD_REQUEST
                };
                (status, err.to_string())
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
