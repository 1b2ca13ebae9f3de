#[cfg(test)]
mod wiki_handler_tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};
    use crate::error::AppError;
    use crate::observability::ObservabilityState;
    use crate::services::create_resolver_service;
    use crate::storage::MockBlobStore;

    const PAGE: &str = r#"{
        "title": "도쿄도",
        "original_title": "東京都",
        "html": "<p>도쿄도는 일본의 수도이다.</p>",
        "last_rev_timestamp": "2025-01-01T00:00:00+00:00"
    }"#;

    fn app_with(store: MockBlobStore) -> (Router, Arc<ObservabilityState>) {
        let observability = Arc::new(ObservabilityState::new("0.1.0".to_string()));
        let resolver = create_resolver_service(Arc::new(store));
        let state = AppState::new(resolver, observability.metrics.clone());
        (create_router(state, observability.clone()), observability)
    }

    fn store_with(key: &'static str, text: Option<&'static str>) -> MockBlobStore {
        let mut store = MockBlobStore::new();
        store.expect_backend().return_const("mock");
        store
            .expect_read()
            .withf(move |k| k.to_string() == key)
            .returning(move |_| Ok(text.map(str::to_string)));
        store
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_content_renders_html() {
        let (app, observability) = app_with(store_with("東京都.json", Some(PAGE)));

        let response = get(app, "/wiki/%E6%9D%B1%E4%BA%AC%E9%83%BD").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("<title>도쿄도 - jako</title>"));
        assert!(body.contains("<p>도쿄도는 일본의 수도이다.</p>"));
        assert_eq!(
            observability
                .metrics
                .resolutions_content
                .load(Ordering::SeqCst),
            1
        );
    }

    #[tokio::test]
    async fn test_nested_title_uses_substituted_key() {
        let (app, _) = app_with(store_with("A__B.json", None));

        let response = get(app, "/wiki/A/B").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://ja.m.wikipedia.org/wiki/A%2FB"
        );
    }

    #[tokio::test]
    async fn test_stored_redirect() {
        let (app, _) = app_with(store_with(
            "X.json",
            Some(r#"{"redirect":{"to":"C","tofragment":"Sec1"}}"#),
        ));

        let response = get(app, "/wiki/X").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/wiki/C#Sec1");
    }

    #[tokio::test]
    async fn test_empty_title_is_404() {
        let mut store = MockBlobStore::new();
        store.expect_read().never();
        let (app, _) = app_with(store);

        let response = get(app, "/wiki").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_trailing_slash_is_404() {
        let mut store = MockBlobStore::new();
        store.expect_read().never();
        let (app, _) = app_with(store);

        let response = get(app, "/wiki/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::LOCATION).is_none());
    }

    #[tokio::test]
    async fn test_store_error_is_500_without_redirect() {
        let mut store = MockBlobStore::new();
        store.expect_backend().return_const("mock");
        store
            .expect_read()
            .returning(|_| Err(AppError::Storage("access denied".into())));
        let (app, observability) = app_with(store);

        let response = get(app, "/wiki/A").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::LOCATION).is_none());
        assert_eq!(observability.metrics.errors_total.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_record_is_500() {
        let (app, _) = app_with(store_with("A.json", Some("{\"title\": 1}")));

        let response = get(app, "/wiki/A").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_w_paths_go_to_source_site() {
        let mut store = MockBlobStore::new();
        store.expect_read().never();
        let (app, _) = app_with(store);

        let response = get(app, "/w/index.php?title=%E6%9D%B1&oldid=1").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://ja.m.wikipedia.org/w/index.php?title=%E6%9D%B1&oldid=1"
        );
    }
}
