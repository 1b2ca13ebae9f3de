// End-to-end tests for article serving over the file system backend.
//
// Tests cover:
// - Translated pages rendered from stored JSON
// - Stored redirects (original title -> translated title, fragments)
// - Fallback to the source site when nothing is stored
// - Failures that must not turn into redirects

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use jako::api::{app_state::AppState, create_router};
use jako::config::config::{StorageBackend, StorageConfig};
use jako::observability::ObservabilityState;
use jako::services::{Resolution, create_resolver_service};
use jako::storage::StorageFactory;

const TOKYO: &str = r#"{
  "title": "도쿄도",
  "original_title": "東京都",
  "html": "<section><p><b>도쿄도</b>는 일본의 수도이다.</p></section>",
  "last_rev_timestamp": "2025-01-01T03:00:00+00:00"
}"#;

fn publish(dir: &Path, file: &str, text: &str) {
    std::fs::write(dir.join(file), text).unwrap();
}

fn published_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    publish(dir.path(), "도쿄도.json", TOKYO);
    publish(dir.path(), "東京都.json", r#"{"redirect": {"to": "도쿄도"}}"#);
    publish(
        dir.path(),
        "東京府.json",
        r#"{"redirect": {"to": "도쿄도", "tofragment": "역사"}}"#,
    );
    publish(
        dir.path(),
        "東京都__区部.json",
        r#"{"redirect": {"to": "도쿄도", "tofragment": null}}"#,
    );
    publish(dir.path(), "broken.json", r#"{"title": "broken"}"#);
    dir
}

fn storage_config(dir: &Path) -> StorageConfig {
    StorageConfig {
        backend: StorageBackend::File,
        file_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

fn app(dir: &Path) -> Router {
    let store = StorageFactory::create(&storage_config(dir)).unwrap();
    let observability = Arc::new(ObservabilityState::new("test".to_string()));
    let state = AppState::new(create_resolver_service(store), observability.metrics.clone());
    create_router(state, observability)
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &axum::response::Response) -> String {
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

fn wiki_uri(title: &str) -> String {
    format!("/wiki/{}", urlencoding::encode(title))
}

#[tokio::test]
async fn serves_translated_page() {
    let dir = published_dir();
    let response = get(app(dir.path()), &wiki_uri("도쿄도")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("<section><p><b>도쿄도</b>는 일본의 수도이다.</p></section>"));
    assert!(body.contains("최종 수정일: 2025. 1. 1."));
    assert!(body.contains(&format!(
        "https://ja.m.wikipedia.org/wiki/{}",
        urlencoding::encode("東京都")
    )));
}

#[tokio::test]
async fn original_title_redirects_to_translation() {
    let dir = published_dir();
    let response = get(app(dir.path()), &wiki_uri("東京都")).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), wiki_uri("도쿄도"));
}

#[tokio::test]
async fn redirect_keeps_fragment() {
    let dir = published_dir();
    let response = get(app(dir.path()), &wiki_uri("東京府")).await;

    assert_eq!(
        location(&response),
        format!("{}#{}", wiki_uri("도쿄도"), urlencoding::encode("역사"))
    );
}

#[tokio::test]
async fn subpage_title_reads_substituted_file() {
    let dir = published_dir();
    let response = get(app(dir.path()), "/wiki/%E6%9D%B1%E4%BA%AC%E9%83%BD/%E5%8C%BA%E9%83%A8").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), wiki_uri("도쿄도"));
}

#[tokio::test]
async fn missing_translation_falls_back_to_source_site() {
    let dir = published_dir();
    let response = get(app(dir.path()), &wiki_uri("大阪府")).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    let target = location(&response);
    let encoded = target
        .strip_prefix("https://ja.m.wikipedia.org/wiki/")
        .unwrap();
    assert_eq!(urlencoding::decode(encoded).unwrap(), "大阪府");
}

#[tokio::test]
async fn incomplete_record_is_server_error() {
    let dir = published_dir();
    let response = get(app(dir.path()), "/wiki/broken").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn unreadable_storage_is_server_error() {
    let dir = TempDir::new().unwrap();
    let not_a_dir = dir.path().join("publish");
    std::fs::write(&not_a_dir, "").unwrap();

    let response = get(app(&not_a_dir), "/wiki/A").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn resolution_is_idempotent() {
    let dir = published_dir();
    let store = StorageFactory::create(&storage_config(dir.path())).unwrap();
    let resolver = create_resolver_service(store);

    let first = resolver.resolve("도쿄도").await.unwrap();
    let second = resolver.resolve("도쿄도").await.unwrap();
    assert_eq!(first, second);
    assert!(matches!(first, Resolution::Content(_)));
}
