use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::{
    api::app_state::AppState,
    error::AppError,
    render::render_article,
    services::{Resolution, resolver::SOURCE_ORIGIN},
};

/// 302 Found 重定向
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

async fn resolve_and_respond(state: &AppState, title: &str) -> Result<Response, AppError> {
    let resolution = state.resolver.resolve(title).await?;
    state.metrics.record_resolution(&resolution);
    debug!(article = title, outcome = resolution.outcome(), "article resolved");

    match resolution {
        Resolution::NotFound => Err(AppError::NotFound("article title is empty".into())),
        Resolution::ExternalRedirect(url) | Resolution::InternalRedirect(url) => Ok(found(&url)),
        Resolution::Content(record) => Ok(Html(render_article(&record)).into_response()),
    }
}

/// `GET /wiki/*title`，路径参数已由 axum 完成 URL 解码
pub async fn get_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Response, AppError> {
    resolve_and_respond(&state, &title).await
}

/// `GET /wiki`：没有文章标识
pub async fn get_article_index(State(state): State<AppState>) -> Result<Response, AppError> {
    resolve_and_respond(&state, "").await
}

/// `GET /w/*rest`：MediaWiki 的 index.php 风格链接，原样转到日文站点
pub async fn redirect_to_source_site(uri: Uri) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    found(&format!("{}{}", SOURCE_ORIGIN, path_and_query))
}
