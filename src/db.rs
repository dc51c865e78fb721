use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::PathBuf;
use tokio::fs;

pub const MIGRATIONS_DIR: &str = "migrations";

/// Open a SeaORM connection to the configured Postgres database.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Minimal migration runner: executes the SQL files in `dir` in filename
/// order. Postgres prepared statements cannot contain multiple commands,
/// so each file is split on `;` and run statement by statement.
pub async fn apply_migrations(conn: &DatabaseConnection, dir: &str) -> Result<()> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in &files {
        tracing::debug!(file = %file.display(), "applying migration");
        let sql = fs::read_to_string(file).await?;
        for stmt in sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            conn.execute(Statement::from_string(backend, format!("{stmt};")))
                .await?;
        }
    }

    tracing::info!(count = files.len(), "migrations applied");
    Ok(())
}
