//! 存储键
//!
//! 文章标识是类路径字符串（可能含 `/`），存储键是扁平的文件名。
//! 映射规则：`_` → `_u`，`/` → `__`，再追加 `.json`。
//! 转换后键中的每个 `_` 都是两字符记号的开头，因此映射是单射的；
//! 不含 `_` 的标题（MediaWiki 规范标题都不含 `_`）与发布流水线写入的文件名逐字节一致。
//!
//! 兼容性：文件名里带字面 `_` 的已发布数据（如 `Foo_bar.json`）不再可达，
//! `/wiki/Foo_bar` 会查找 `Foo_ubar.json` 并回落到原站。发布端写入此类标题时
//! 必须采用同样的转义。

use std::fmt;

/// 替换 `/` 的记号
pub const SEPARATOR_TOKEN: &str = "__";
/// 替换字面 `_` 的记号
pub const UNDERSCORE_TOKEN: &str = "_u";
/// 存储键扩展名
pub const EXTENSION: &str = ".json";

/// 扁平存储键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// 由文章标识派生存储键
    pub fn from_article_key(article_key: &str) -> Self {
        let mut key = String::with_capacity(article_key.len() + EXTENSION.len() + 4);
        for c in article_key.chars() {
            match c {
                '_' => key.push_str(UNDERSCORE_TOKEN),
                '/' => key.push_str(SEPARATOR_TOKEN),
                c => key.push(c),
            }
        }
        key.push_str(EXTENSION);
        Self(key)
    }

    /// 还原文章标识；不是由 [`StorageKey::from_article_key`] 生成的键返回 `None`
    pub fn to_article_key(&self) -> Option<String> {
        let stem = self.0.strip_suffix(EXTENSION)?;
        let mut article_key = String::with_capacity(stem.len());
        let mut chars = stem.chars();
        while let Some(c) = chars.next() {
            if c != '_' {
                article_key.push(c);
                continue;
            }
            match chars.next()? {
                '_' => article_key.push('/'),
                'u' => article_key.push('_'),
                _ => return None,
            }
        }
        Some(article_key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
