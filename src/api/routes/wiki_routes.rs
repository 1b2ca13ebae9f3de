//! Wiki Routes
//!
//! 定义文章页面相关的路由。

use crate::api::handlers::wiki_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建文章路由器
pub fn create_wiki_router() -> Router<AppState> {
    Router::new()
        .route("/wiki", get(get_article_index))
        .route("/wiki/*title", get(get_article))
        .route("/w/*rest", get(redirect_to_source_site))
}
