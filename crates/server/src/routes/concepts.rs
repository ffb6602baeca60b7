use axum::{extract::State, Json};
use models::Concept;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// 获取全部临床概念
pub async fn list_concepts(State(state): State<ServerState>) -> Result<Json<Vec<Concept>>, ApiError> {
    let all = state.catalog.get_all().await?;
    info!(count = all.len(), "list concepts");
    Ok(Json(all))
}

/// 载入内置种子数据
pub async fn load_hardcoded_data(State(state): State<ServerState>) -> Result<&'static str, ApiError> {
    state.catalog.load_seed_set().await?;
    Ok("Hardcoded data loaded successfully!")
}

/// 从 data.csv 载入；失败前已写入的记录保留
pub async fn load_csv_data(State(state): State<ServerState>) -> Result<&'static str, ApiError> {
    let report = state.catalog.load_tabular_resource().await?;
    info!(loaded = report.loaded, "csv ingest via http");
    Ok("CSV data loaded successfully!")
}
