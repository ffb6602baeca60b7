use std::sync::Arc;

use axum::{http::Method, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::catalog::{CatalogService, ConceptStore};

pub mod concepts;

/// Shared handler state. The store backend is picked at startup, hence the trait object.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService<dyn ConceptStore>>,
}

impl ServerState {
    pub fn new(catalog: CatalogService<dyn ConceptStore>) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// CORS for `/api/**`: any origin and header, the four CRUD methods, no credentials.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_credentials(false)
}

/// Build the full application router: catalog API plus health probe.
pub fn build_router(state: ServerState) -> Router {
    let api = Router::new()
        .route("/api/concepts", get(concepts::list_concepts))
        .route("/api/loadHardcodedData", get(concepts::load_hardcoded_data))
        .route("/api/loadCsvData", get(concepts::load_csv_data))
        .layer(api_cors());

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
