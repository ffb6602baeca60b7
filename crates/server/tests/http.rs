use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use models::Concept;
use serde_json::Value;
use service::catalog::{memory::MemoryConceptStore, CatalogService, ConceptStore, CsvLoader};
use service::errors::ServiceError;
use tower::ServiceExt;

use server::routes::{self, ServerState};

struct TestApp {
    router: Router,
    catalog: Arc<CatalogService<dyn ConceptStore>>,
    resource_dir: PathBuf,
}

impl TestApp {
    async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Vec<u8>)> {
        let req = Request::builder().uri(uri).body(Body::empty())?;
        let res = self.router.clone().oneshot(req).await?;
        let status = res.status();
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
        Ok((status, body.to_vec()))
    }

    async fn concepts(&self) -> anyhow::Result<Vec<Value>> {
        let (status, body) = self.get("/api/concepts").await?;
        assert_eq!(status, StatusCode::OK);
        let v: Value = serde_json::from_slice(&body)?;
        Ok(v.as_array().cloned().unwrap_or_default())
    }
}

/// Empty in-memory catalog; `csv` becomes the bundled `data.csv` when given.
async fn app(csv: Option<&str>) -> anyhow::Result<TestApp> {
    let resource_dir = std::env::temp_dir().join(format!("catalog_http_{}", uuid::Uuid::new_v4()));
    tokio::fs::create_dir_all(&resource_dir).await?;
    if let Some(text) = csv {
        tokio::fs::write(resource_dir.join("data.csv"), text).await?;
    }
    let store: Arc<dyn ConceptStore> = Arc::new(MemoryConceptStore::new());
    let state = ServerState::new(CatalogService::new(store, CsvLoader::new(&resource_dir)));
    let catalog = Arc::clone(&state.catalog);
    Ok(TestApp { router: routes::build_router(state), catalog, resource_dir })
}

#[tokio::test]
async fn concepts_empty_at_start() -> anyhow::Result<()> {
    let app = app(None).await?;
    assert!(app.concepts().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn seed_then_list_returns_ten_concepts() -> anyhow::Result<()> {
    let app = app(None).await?;
    let (status, body) = app.get("/api/loadHardcodedData").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body)?, "Hardcoded data loaded successfully!");

    let all = app.concepts().await?;
    assert_eq!(all.len(), 10);
    let ids: Vec<&str> = all.iter().filter_map(|c| c["conceptId"].as_str()).collect();
    let expected: Vec<String> = (1..=10).map(|n| format!("C{n:03}")).collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());

    let c001 = all.iter().find(|c| c["conceptId"] == "C001").expect("C001");
    assert_eq!(c001["parentIds"], serde_json::json!(["P001", "P002"]));
    assert_eq!(c001["childIds"], serde_json::json!(["C002", "C003"]));
    assert_eq!(c001["alternateNames"], "High Blood Pressure");
    assert_eq!(
        c001["description"],
        "A condition in which the force of the blood against the artery walls is too high."
    );
    Ok(())
}

#[tokio::test]
async fn seed_overwrites_direct_upsert() -> anyhow::Result<()> {
    let app = app(None).await?;
    app.catalog.add_or_update(Concept::new("C001", "X", "", &[], &[], "")).await?;
    let (status, _) = app.get("/api/loadHardcodedData").await?;
    assert_eq!(status, StatusCode::OK);
    let c001 = app.catalog.get_by_id("C001").await?.expect("C001");
    assert_eq!(c001.display_name, "Hypertension");
    Ok(())
}

#[tokio::test]
async fn csv_ingest_keeps_empty_edge_quirk() -> anyhow::Result<()> {
    let app = app(Some("id,name,desc,p,c,alt\nC100,Flu,,,P9;P8,Influenza\n")).await?;
    let (status, body) = app.get("/api/loadCsvData").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body)?, "CSV data loaded successfully!");

    let flu = app.catalog.get_by_id("C100").await?.expect("C100");
    assert_eq!(flu.parent_ids, vec![String::new()]);
    assert_eq!(flu.child_ids, vec!["P9".to_string(), "P8".to_string()]);
    assert_eq!(flu.alternate_names, "Influenza");

    let all = app.concepts().await?;
    assert_eq!(all[0]["parentIds"], serde_json::json!([""]));
    let _ = tokio::fs::remove_dir_all(&app.resource_dir).await;
    Ok(())
}

#[tokio::test]
async fn malformed_csv_returns_500_with_line_number() -> anyhow::Result<()> {
    let app = app(Some("id,name,desc,p,c,alt\nBAD,only,three,fields\n")).await?;
    let (status, body) = app.get("/api/loadCsvData").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(String::from_utf8(body)?.contains("line 2"));
    assert!(app.catalog.get_all().await?.iter().all(|c| c.concept_id != "BAD"));
    let _ = tokio::fs::remove_dir_all(&app.resource_dir).await;
    Ok(())
}

#[tokio::test]
async fn missing_csv_resource_returns_500() -> anyhow::Result<()> {
    let app = app(None).await?;
    let (status, _) = app.get("/api/loadCsvData").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn empty_id_is_rejected_and_store_unchanged() -> anyhow::Result<()> {
    let app = app(None).await?;
    let res = app.catalog.add_or_update(Concept::new("", "X", "", &[], &[], "")).await;
    assert!(matches!(res, Err(ServiceError::Validation(_))));
    assert!(app.concepts().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn api_responses_carry_cors_headers() -> anyhow::Result<()> {
    let app = app(None).await?;
    let req = Request::builder()
        .uri("/api/concepts")
        .header(header::ORIGIN, "http://ui.example")
        .body(Body::empty())?;
    let res = app.router.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).map(|v| v.as_bytes()), Some(&b"*"[..]));
    assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/concepts")
        .header(header::ORIGIN, "http://ui.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom")
        .body(Body::empty())?;
    let res = app.router.clone().oneshot(preflight).await?;
    let methods = res
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    for m in ["GET", "POST", "PUT", "DELETE"] {
        assert!(methods.contains(m), "missing {m} in {methods}");
    }
    assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_HEADERS).is_some());
    Ok(())
}

#[tokio::test]
async fn unknown_path_is_404_and_health_ok() -> anyhow::Result<()> {
    let app = app(None).await?;
    let (status, _) = app.get("/api/unknown").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get("/health").await?;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body)?;
    assert_eq!(v["status"], "ok");
    Ok(())
}
