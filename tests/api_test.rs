use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use std::path::PathBuf;
use tempfile::TempDir;
use testimonials::domain::ports::SubmissionStore;
use testimonials::{router, InMemoryStore, JsonFileStore, ServerConfig, SubmissionService};
use tower::ServiceExt;

fn config_in(dir: &TempDir) -> ServerConfig {
    let static_dir = dir.path().join("public");
    std::fs::create_dir_all(&static_dir).unwrap();
    std::fs::write(static_dir.join("index.html"), "<h1>Les Petites Attentions</h1>").unwrap();
    std::fs::write(static_dir.join("style.css"), "body { margin: 0; }").unwrap();

    ServerConfig {
        data_dir: dir.path().join("data"),
        static_dir,
        ..ServerConfig::default()
    }
}

fn file_app(config: &ServerConfig) -> Router {
    let store = JsonFileStore::new(data_path(config));
    router(SubmissionService::new(store), config)
}

fn data_path(config: &ServerConfig) -> PathBuf {
    config.data_dir.join(&config.data_file)
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|err| panic!("router request failed: {err}"))
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/testimonials")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("response body is not JSON: {err}"))
}

#[tokio::test]
async fn test_submit_then_read_stats() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let app = file_app(&config);

    let response = send(
        &app,
        post_json(
            r#"{"ageRange":"25-34","profession":"engineer","familySituation":"single","feeling":"great"}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );

    let created = response_json(response).await;
    assert_eq!(created["message"], "Merci pour votre témoignage !");
    assert!(created["entry"]["id"].is_string());
    assert!(created["entry"]["submittedAt"].is_string());
    assert_eq!(created["entry"]["feeling"], "great");

    let response = send(&app, get("/api/stats")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        serde_json::json!({
            "totalSubmissions": 1,
            "ageRanges": {"25-34": 1},
            "familySituations": {"single": 1}
        })
    );

    let persisted: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(data_path(&config)).unwrap()).unwrap();
    assert_eq!(persisted.as_array().unwrap().len(), 1);
    assert_eq!(persisted[0]["id"], created["entry"]["id"]);
}

#[tokio::test]
async fn test_missing_fields_are_all_reported() {
    let dir = TempDir::new().unwrap();
    let app = file_app(&config_in(&dir));

    let response = send(&app, post_json(r#"{"feeling":"ok"}"#)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(
        body["errors"],
        serde_json::json!([
            "La tranche d'âge est obligatoire.",
            "La profession est obligatoire.",
            "La situation de famille est obligatoire."
        ])
    );
}

#[tokio::test]
async fn test_empty_body_reports_four_errors() {
    let dir = TempDir::new().unwrap();
    let app = file_app(&config_in(&dir));

    let response = send(&app, post_json(Body::empty())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["errors"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_unparseable_body_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = file_app(&config_in(&dir));

    let response = send(&app, post_json("{not json")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["message"], "Requête invalide.");
}

#[tokio::test]
async fn test_oversized_body_is_rejected_before_the_store() {
    let dir = TempDir::new().unwrap();
    let config = ServerConfig {
        body_limit: 64,
        ..config_in(&dir)
    };
    let service = SubmissionService::new(InMemoryStore::new());
    let app = router(service, &config);

    let feeling = "x".repeat(200);
    let payload = format!(
        r#"{{"ageRange":"25-34","profession":"engineer","familySituation":"single","feeling":"{}"}}"#,
        feeling
    );

    let response = send(&app, post_json(payload)).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response_json(response).await["message"],
        "Données trop volumineuses."
    );

    let response = send(&app, get("/api/stats")).await;
    assert_eq!(response_json(response).await["totalSubmissions"], 0);
}

#[tokio::test]
async fn test_corrupted_history_does_not_block_submissions() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let store = JsonFileStore::new(data_path(&config));
    store.ensure_ready().await.unwrap();
    std::fs::write(store.path(), "{\"broken\": [").unwrap();
    let app = router(SubmissionService::new(store), &config);

    let response = send(&app, get("/api/stats")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["totalSubmissions"], 0);

    let response = send(
        &app,
        post_json(
            r#"{"ageRange":"35-44","profession":"nurse","familySituation":"married","feeling":"seen"}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, get("/api/stats")).await;
    assert_eq!(response_json(response).await["totalSubmissions"], 1);
}

#[tokio::test]
async fn test_landing_page_and_assets() {
    let dir = TempDir::new().unwrap();
    let app = file_app(&config_in(&dir));

    for uri in ["/", "/index.html"] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Les Petites Attentions</h1>");
    }

    let response = send(&app, get("/style.css")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/css"));
}

#[tokio::test]
async fn test_unknown_paths_return_json_not_found() {
    let dir = TempDir::new().unwrap();
    let app = file_app(&config_in(&dir));

    for request in [
        get("/missing.js"),
        get("/../Cargo.toml"),
        get("/api/testimonials"),
    ] {
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response_json(response).await["message"],
            "Ressource introuvable."
        );
    }
}

#[tokio::test]
async fn test_failed_write_is_a_server_error() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    std::fs::write(&config.data_dir, "a file where the data directory should be").unwrap();
    let app = file_app(&config);

    let response = send(
        &app,
        post_json(
            r#"{"ageRange":"25-34","profession":"engineer","familySituation":"single","feeling":"great"}"#,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response_json(response).await["message"],
        "Erreur interne du serveur."
    );
}
