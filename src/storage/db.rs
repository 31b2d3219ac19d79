use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

/// Database handle owning the SeaORM connection pool.
pub struct Storage {
    pub conn: DatabaseConnection,
}

impl Storage {
    /// Connect to the configured database and make sure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(database_url);
        options.max_connections(4).sqlx_logging(false);

        let conn = Database::connect(options).await?;
        init_schema(&conn).await?;

        info!("connected to {database_url}");
        Ok(Storage { conn })
    }
}

/// Initialize the database schema.
///
/// The `UNIQUE` constraint on `projects.name` backs the duplicate-name check:
/// two concurrent creates that both pass the service-level check fail here
/// with a storage conflict instead of producing duplicates. Cascade delete of
/// a project's tasks is declared at this level as well.
pub async fn init_schema<C>(conn: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    conn.execute_unprepared(
        r"
        CREATE TABLE IF NOT EXISTS projects (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            created_at TEXT NOT NULL
        )
        ",
    )
    .await?;

    conn.execute_unprepared(
        r"
        CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            status TEXT NOT NULL DEFAULT 'todo',
            created_at TEXT NOT NULL,
            deadline TEXT,
            project_id TEXT NOT NULL,
            FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE CASCADE
        )
        ",
    )
    .await?;

    Ok(())
}
