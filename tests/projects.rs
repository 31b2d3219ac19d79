mod common;

use todolist::{Config, TodoError};

#[tokio::test]
async fn test_create_project_and_get_it_back() {
    let service = common::service().await;

    let project = service
        .create_project("Home", Some("chores"))
        .await
        .expect("valid project should be created");
    assert!(!project.id.is_empty());
    assert_eq!(project.name, "Home");
    assert_eq!(project.description.as_deref(), Some("chores"));

    let found = service
        .get_project(&project.id)
        .await
        .expect("lookup should succeed")
        .expect("created project should be retrievable");
    assert_eq!(found, project);
}

#[tokio::test]
async fn test_create_project_without_description() {
    let service = common::service().await;

    let project = service.create_project("Bare", None).await.unwrap();
    assert_eq!(project.description, None);
}

#[tokio::test]
async fn test_list_projects() {
    let service = common::service().await;

    assert!(service.list_projects().await.unwrap().is_empty());

    service.create_project("One", None).await.unwrap();
    service.create_project("Two", None).await.unwrap();

    let projects = service.list_projects().await.unwrap();
    assert_eq!(projects.len(), 2);
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert!(names.contains(&"One"));
    assert!(names.contains(&"Two"));
}

#[tokio::test]
async fn test_empty_project_name_rejected() {
    let service = common::service().await;

    let err = service.create_project("", Some("x")).await.unwrap_err();
    assert!(matches!(err, TodoError::EmptyField(_)), "got {err:?}");
    // whitespace-only is blank too
    let err = service.create_project("   ", None).await.unwrap_err();
    assert!(matches!(err, TodoError::EmptyField(_)), "got {err:?}");

    assert!(service.list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_project_field_length_limits() {
    let service = common::service().await;

    let long_name = "x".repeat(31);
    let err = service.create_project(&long_name, None).await.unwrap_err();
    assert!(matches!(err, TodoError::FieldTooLong { max: 30, .. }), "got {err:?}");

    let exact_name = "x".repeat(30);
    service.create_project(&exact_name, None).await.unwrap();

    let long_desc = "d".repeat(151);
    let err = service
        .create_project("Described", Some(&long_desc))
        .await
        .unwrap_err();
    assert!(matches!(err, TodoError::FieldTooLong { max: 150, .. }), "got {err:?}");
}

#[tokio::test]
async fn test_duplicate_project_name_rejected() {
    let service = common::service().await;

    service.create_project("Same", Some("d")).await.unwrap();
    let err = service.create_project("Same", Some("d")).await.unwrap_err();
    assert!(matches!(err, TodoError::DuplicateProjectName(_)), "got {err:?}");
}

#[tokio::test]
async fn test_project_limit_is_a_live_count() {
    let config = Config {
        max_projects: 3,
        ..Config::default()
    };
    let service = common::service_with(config).await;

    for i in 0..3 {
        service.create_project(&format!("p{i}"), None).await.unwrap();
    }

    let err = service.create_project("overflow", None).await.unwrap_err();
    assert!(matches!(err, TodoError::ProjectLimitExceeded(3)), "got {err:?}");

    // freeing a slot makes creation possible again
    let victim = service.list_projects().await.unwrap().pop().unwrap();
    service.delete_project(&victim.id).await.unwrap();
    service.create_project("overflow", None).await.unwrap();
}

#[tokio::test]
async fn test_eleventh_project_fails_with_default_limit() {
    let service = common::service().await;

    for i in 0..10 {
        service.create_project(&format!("project-{i}"), None).await.unwrap();
    }

    let err = service.create_project("project-10", None).await.unwrap_err();
    assert!(matches!(err, TodoError::ProjectLimitExceeded(10)), "got {err:?}");
    // the message identifies the limit, not a generic failure
    assert!(err.to_string().contains("10"), "got '{err}'");
}

#[tokio::test]
async fn test_limit_check_precedes_field_validation() {
    let config = Config {
        max_projects: 1,
        ..Config::default()
    };
    let service = common::service_with(config).await;
    service.create_project("only", None).await.unwrap();

    // name is blank AND the cap is reached: the cap wins
    let err = service.create_project("", None).await.unwrap_err();
    assert!(matches!(err, TodoError::ProjectLimitExceeded(1)), "got {err:?}");
}

#[tokio::test]
async fn test_field_validation_precedes_duplicate_check() {
    let service = common::service().await;
    service.create_project("Valid", None).await.unwrap();

    // duplicate name AND oversized description: validation wins
    let long_desc = "d".repeat(151);
    let err = service
        .create_project("Valid", Some(&long_desc))
        .await
        .unwrap_err();
    assert!(matches!(err, TodoError::FieldTooLong { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_edit_project() {
    let service = common::service().await;
    let project = service.create_project("Old", Some("old desc")).await.unwrap();

    // rename only
    let edited = service
        .edit_project(&project.id, Some("New"), None)
        .await
        .unwrap();
    assert_eq!(edited.name, "New");
    assert_eq!(edited.description.as_deref(), Some("old desc"));

    // description only
    let edited = service
        .edit_project(&project.id, None, Some("new desc"))
        .await
        .unwrap();
    assert_eq!(edited.name, "New");
    assert_eq!(edited.description.as_deref(), Some("new desc"));

    // nothing provided is a no-op
    let edited = service.edit_project(&project.id, None, None).await.unwrap();
    assert_eq!(edited.name, "New");

    // created_at is immutable through edits
    assert_eq!(edited.created_at, project.created_at);
}

#[tokio::test]
async fn test_edit_project_same_name_is_not_a_duplicate() {
    let service = common::service().await;
    let project = service.create_project("Keep", None).await.unwrap();

    // re-assigning the current name re-validates and succeeds
    let edited = service
        .edit_project(&project.id, Some("Keep"), None)
        .await
        .unwrap();
    assert_eq!(edited.name, "Keep");
}

#[tokio::test]
async fn test_edit_project_rejects_taken_name() {
    let service = common::service().await;
    service.create_project("Taken", None).await.unwrap();
    let project = service.create_project("Mine", None).await.unwrap();

    let err = service
        .edit_project(&project.id, Some("Taken"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, TodoError::DuplicateProjectName(_)), "got {err:?}");
}

#[tokio::test]
async fn test_edit_missing_project() {
    let service = common::service().await;

    let err = service
        .edit_project("no-such-id", Some("x"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, TodoError::ProjectNotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn test_delete_missing_project() {
    let service = common::service().await;

    let err = service.delete_project("no-such-id").await.unwrap_err();
    assert!(matches!(err, TodoError::ProjectNotFound(_)), "got {err:?}");
}
