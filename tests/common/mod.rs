use sea_orm::{ConnectOptions, Database};

use todolist::{storage, Config, TodoService};

/// Build a service over a fresh in-memory database with the given limits.
///
/// The pool is capped at one connection so every query sees the same
/// in-memory database.
pub async fn service_with(config: Config) -> TodoService {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("in-memory sqlite should connect");
    storage::init_schema(&db).await.expect("schema should apply");

    TodoService::new(db, config)
}

/// Build a service with default limits.
#[allow(dead_code)]
pub async fn service() -> TodoService {
    service_with(Config::default()).await
}
