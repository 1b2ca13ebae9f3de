//! 核心数据模型模块
//!
//! 定义 jako 的核心数据结构：ArticleRecord, RedirectDirective, StorageKey。

pub mod article;
pub mod storage_key;

pub use article::*;
pub use storage_key::*;
