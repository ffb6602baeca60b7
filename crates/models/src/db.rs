use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Open a pooled connection from the `[database]` config section.
///
/// In-memory SQLite is pinned to one connection; every extra pooled
/// connection would otherwise see its own empty database.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    let in_memory = cfg.url.starts_with("sqlite::memory:") || cfg.url.contains("mode=memory");
    let (max, min) = if in_memory { (1, 1) } else { (cfg.max_connections, cfg.min_connections) };
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(max_connections = max, "database connected");
    Ok(db)
}

/// Connect to a throwaway in-memory SQLite database.
pub async fn connect_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    connect_with_config(&cfg).await
}
