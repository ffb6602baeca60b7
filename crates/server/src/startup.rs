use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging;
use configs::{AppConfig, StoreBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::info;

use crate::routes::{self, ServerState};
use service::{
    catalog::{memory::MemoryConceptStore, repo::seaorm::SeaOrmConceptStore, CatalogService, ConceptStore, CsvLoader},
    file::concept_store::FileConceptStore,
    runtime,
};

/// Open the configured store backend; the database backend gets its schema migrated first.
pub async fn build_store(cfg: &AppConfig) -> anyhow::Result<Arc<dyn ConceptStore>> {
    let store: Arc<dyn ConceptStore> = match cfg.catalog.store {
        StoreBackend::Memory => Arc::new(MemoryConceptStore::new()),
        StoreBackend::File => FileConceptStore::new(cfg.catalog.data_file.clone()).await?,
        StoreBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            Arc::new(SeaOrmConceptStore::new(db))
        }
    };
    info!(backend = ?cfg.catalog.store, "concept store opened");
    Ok(store)
}

fn load_bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Build store, catalog service and router from config, seeding the catalog when enabled.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let store = build_store(cfg).await?;
    let catalog = CatalogService::new(store, CsvLoader::new(&cfg.catalog.resource_dir));
    if cfg.catalog.seed_on_startup {
        catalog.load_seed_set().await?;
    }
    Ok(routes::build_router(ServerState::new(catalog)))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_and_validate()?;
    init_logging(&cfg.logging.format);

    let data_dir = cfg.catalog.data_file.parent().unwrap_or(Path::new("."));
    runtime::ensure_env(&cfg.catalog.resource_dir, data_dir).await?;

    let app = build_app(&cfg).await?;

    let addr = load_bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, backend = ?cfg.catalog.store, "application started and data loaded");
    axum::serve(listener, app).await?;
    Ok(())
}
