//! jako - 日文维基百科机器翻译文章服务
//!
//! 按标题从存储中读取预先翻译好的文章并渲染为 HTML；
//! 没有译文时回退到日文维基百科原文。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod render;
pub mod security;
pub mod services;
pub mod storage;
