//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::warn;

/// Ensure the data directory exists; warn when the resource directory is missing.
pub async fn ensure_env(resource_dir: &Path, data_dir: &Path) -> anyhow::Result<()> {
    if tokio::fs::metadata(resource_dir).await.is_err() {
        warn!(resource_dir = %resource_dir.display(), "resource directory not found; csv ingest will fail");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", data_dir.display()))?;
    Ok(())
}
