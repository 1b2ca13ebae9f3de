//! API 模块
//!
//! 提供文章页面的 HTTP 接口。

#[cfg(test)]
mod api_tests;
pub mod app_state;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::observability::{ObservabilityState, metrics_middleware};
use crate::security::middleware::security_headers_middleware;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: AppState, observability: Arc<ObservabilityState>) -> Router {
    Router::new()
        .merge(routes::wiki_routes::create_wiki_router())
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(axum::middleware::from_fn_with_state(
            observability,
            metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
