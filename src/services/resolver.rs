//! 文章解析服务
//!
//! 将请求的文章标识解析为：渲染内容、站内重定向、或回退到日文维基百科。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{ArticleRecord, RedirectDirective, StorageKey, StoredArticle};
use crate::storage::BlobStore;

/// 原文站点
pub const SOURCE_ORIGIN: &str = "https://ja.m.wikipedia.org";

/// 解析结果
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// 请求未携带文章标识
    NotFound,
    /// 没有译文，跳转到原文
    ExternalRedirect(String),
    /// 存储的是重定向文档
    InternalRedirect(String),
    /// 可渲染的译文
    Content(ArticleRecord),
}

impl Resolution {
    /// 指标标签
    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::NotFound => "not_found",
            Resolution::ExternalRedirect(_) => "external_redirect",
            Resolution::InternalRedirect(_) => "internal_redirect",
            Resolution::Content(_) => "content",
        }
    }
}

/// 原文页面地址
pub fn original_wiki_url(article_key: &str) -> String {
    format!("{}/wiki/{}", SOURCE_ORIGIN, urlencoding::encode(article_key))
}

/// 站内重定向地址
pub fn internal_wiki_url(redirect: &RedirectDirective) -> String {
    let mut url = format!("/wiki/{}", urlencoding::encode(&redirect.to));
    if let Some(fragment) = redirect.fragment() {
        url.push('#');
        url.push_str(&urlencoding::encode(fragment));
    }
    url
}

#[async_trait]
pub trait ArticleResolver: Send + Sync {
    /// 解析文章标识；存储故障和数据格式错误直接向上传播，不做重试
    async fn resolve(&self, article_key: &str) -> Result<Resolution>;
}

pub struct ArticleResolverImpl {
    store: Arc<dyn BlobStore>,
}

impl ArticleResolverImpl {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ArticleResolver for ArticleResolverImpl {
    async fn resolve(&self, article_key: &str) -> Result<Resolution> {
        if article_key.is_empty() {
            return Ok(Resolution::NotFound);
        }

        let storage_key = StorageKey::from_article_key(article_key);
        debug!(article = article_key, key = %storage_key, backend = self.store.backend(), "resolving article");

        let Some(text) = self.store.read(storage_key.as_str()).await? else {
            info!(article = article_key, "no translation stored, falling back to source site");
            return Ok(Resolution::ExternalRedirect(original_wiki_url(article_key)));
        };

        match StoredArticle::parse(&text)? {
            StoredArticle::Redirect(redirect) => {
                let url = internal_wiki_url(&redirect);
                debug!(article = article_key, target = %url, "stored redirect");
                Ok(Resolution::InternalRedirect(url))
            }
            StoredArticle::Page(record) => Ok(Resolution::Content(record)),
        }
    }
}

pub fn create_resolver_service(store: Arc<dyn BlobStore>) -> Box<dyn ArticleResolver> {
    Box::new(ArticleResolverImpl::new(store))
}
