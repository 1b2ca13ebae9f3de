//! Routes 模块
//!
//! 定义 HTTP 路由。

pub mod wiki_routes;
