//! 服务模块

pub mod resolver;

pub use resolver::{
    ArticleResolver, Resolution, create_resolver_service, internal_wiki_url, original_wiki_url,
};
