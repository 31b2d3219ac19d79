mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    todolist::api::router(common::service().await)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_project_crud_over_http() {
    let app = app().await;

    // create
    let (status, body) = send(
        &app,
        "POST",
        "/projects",
        Some(json!({"name": "Home", "description": "chores"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Home");
    assert_eq!(body["description"], "chores");
    let id = body["id"].as_str().unwrap().to_string();

    // list
    let (status, body) = send(&app, "GET", "/projects", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    // get
    let (status, body) = send(&app, "GET", &format!("/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());

    // update
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/projects/{id}"),
        Some(json!({"description": "house chores"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Home");
    assert_eq!(body["description"], "house chores");

    // delete is 204 with no body
    let (status, body) = send(&app, "DELETE", &format!("/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", &format!("/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validation_failures_map_to_400() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/projects", Some(json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty"));

    send(&app, "POST", "/projects", Some(json!({"name": "Home"}))).await;
    let (status, body) = send(&app, "POST", "/projects", Some(json!({"name": "Home"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_lookups_map_to_404() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/projects/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));

    let (status, _) = send(&app, "GET", "/tasks/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/tasks/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // creating a task under an unknown project is a lookup failure
    let (status, _) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({"project_id": "missing", "title": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_task_crud_over_http() {
    let app = app().await;

    let (_, project) = send(&app, "POST", "/projects", Some(json!({"name": "Home"}))).await;
    let project_id = project["id"].as_str().unwrap().to_string();

    let (status, task) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({
            "project_id": project_id,
            "title": "Dishes",
            "description": "kitchen",
            "status": "in_progress",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["status"], "in_progress");
    let task_id = task["id"].as_str().unwrap().to_string();

    // invalid status is rejected by the service, not by deserialization
    let (status, body) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({"project_id": project_id, "title": "x", "status": "finished"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid status"));

    // malformed deadline is rejected
    let (status, _) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({"project_id": project_id, "title": "x", "deadline": "next tuesday"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // update status only
    let (status, task) = send(
        &app,
        "PUT",
        &format!("/tasks/{task_id}"),
        Some(json!({"status": "done"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["status"], "done");
    assert_eq!(task["title"], "Dishes");

    let (status, body) = send(&app, "DELETE", &format!("/tasks/{task_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_list_tasks_filtered_by_query_param() {
    let app = app().await;

    let (_, home) = send(&app, "POST", "/projects", Some(json!({"name": "Home"}))).await;
    let (_, work) = send(&app, "POST", "/projects", Some(json!({"name": "Work"}))).await;
    let home_id = home["id"].as_str().unwrap().to_string();
    let work_id = work["id"].as_str().unwrap().to_string();

    for (project_id, title) in [(&home_id, "h1"), (&home_id, "h2"), (&work_id, "w1")] {
        let (status, _) = send(
            &app,
            "POST",
            "/tasks",
            Some(json!({"project_id": project_id, "title": title})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, all) = send(&app, "GET", "/tasks", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, home_tasks) = send(&app, "GET", &format!("/tasks?projectId={home_id}"), None).await;
    assert_eq!(home_tasks.as_array().unwrap().len(), 2);

    // snake_case spelling of the filter is accepted too
    let (_, work_tasks) = send(&app, "GET", &format!("/tasks?project_id={work_id}"), None).await;
    assert_eq!(work_tasks.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_close_overdue_endpoint() {
    let app = app().await;

    let (_, project) = send(&app, "POST", "/projects", Some(json!({"name": "Home"}))).await;
    let project_id = project["id"].as_str().unwrap().to_string();

    let yesterday = (Utc::now() - Duration::days(1)).to_rfc3339();
    let (status, task) = send(
        &app,
        "POST",
        "/tasks",
        Some(json!({"project_id": project_id, "title": "late", "deadline": yesterday})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let task_id = task["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "POST", "/tasks/close-overdue", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["closedCount"], 1);

    let (_, task) = send(&app, "GET", &format!("/tasks/{task_id}"), None).await;
    assert_eq!(task["status"], "done");

    // nothing left to close
    let (_, body) = send(&app, "POST", "/tasks/close-overdue", None).await;
    assert_eq!(body["closedCount"], 0);
}
