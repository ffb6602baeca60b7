#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with the catalog schema applied.
pub async fn memory_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Unique temp file path for file-backed store tests.
pub fn temp_json(prefix: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.json", uuid::Uuid::new_v4()))
}
