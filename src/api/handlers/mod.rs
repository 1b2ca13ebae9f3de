//! Handlers 模块
//!
//! 定义 HTTP 请求处理函数。

pub mod wiki_handler;
