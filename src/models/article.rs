//! 文章数据模型
//!
//! 存储中的 JSON 文档要么是一篇可渲染的译文，要么是指向另一篇文章的重定向。

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// 重定向指令
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedirectDirective {
    /// 目标文章标识
    pub to: String,
    /// 目标文章内的锚点
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tofragment: Option<String>,
}

impl RedirectDirective {
    /// 非空锚点
    pub fn fragment(&self) -> Option<&str> {
        self.tofragment.as_deref().filter(|f| !f.is_empty())
    }
}

/// 已翻译文章
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleRecord {
    /// 译文标题
    pub title: String,
    /// 原站（日文维基百科）标题
    pub original_title: String,
    /// 正文 HTML
    pub html: String,
    /// 抓取原文修订版本的时间
    pub last_rev_timestamp: DateTime<FixedOffset>,
}

/// 解析后的存储文档
#[derive(Debug, Clone, PartialEq)]
pub enum StoredArticle {
    Redirect(RedirectDirective),
    Page(ArticleRecord),
}

/// 存储文档的原始形态，所有字段均可缺省，解析后再分类
#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    redirect: Option<RedirectDirective>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    original_title: Option<String>,
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    last_rev_timestamp: Option<DateTime<FixedOffset>>,
}

impl StoredArticle {
    /// 解析存储文本
    pub fn parse(text: &str) -> Result<Self> {
        let raw: RawArticle = serde_json::from_str(text)?;

        if let Some(redirect) = raw.redirect {
            return Ok(StoredArticle::Redirect(redirect));
        }

        Ok(StoredArticle::Page(ArticleRecord {
            title: required(raw.title, "title")?,
            original_title: required(raw.original_title, "original_title")?,
            html: required(raw.html, "html")?,
            last_rev_timestamp: required(raw.last_rev_timestamp, "last_rev_timestamp")?,
        }))
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| AppError::MalformedRecord(format!("missing field `{}`", field)))
}
