//! 页面渲染
//!
//! 把译文渲染为完整的 HTML 页面。正文 HTML 来自受控的翻译流水线，原样输出不转义；
//! 标题等文本字段做转义。

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::models::ArticleRecord;
use crate::services::original_wiki_url;

/// 站点名称
pub const SITE_NAME: &str = "jako";

const LICENSE_URL: &str = "https://creativecommons.org/licenses/by-sa/4.0/deed.ko";
const PROJECT_URL: &str = "https://github.com/dittos/jako";
const SEOUL_OFFSET_SECS: i32 = 9 * 3600;

/// HTML 文本转义
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

/// 按首尔时间、韩语中等日期格式显示，例如 `2025. 1. 2.`
pub fn format_revision_date(timestamp: &DateTime<FixedOffset>) -> String {
    let seoul = FixedOffset::east_opt(SEOUL_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    timestamp
        .with_timezone(&seoul)
        .format("%Y. %-m. %-d.")
        .to_string()
}

/// 渲染文章页面
pub fn render_article(record: &ArticleRecord) -> String {
    let title = escape_html(&record.title);
    let original_url = escape_html(&original_wiki_url(&record.original_title));
    let revised = format_revision_date(&record.last_rev_timestamp);

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - {site}</title>
</head>
<body>
<div class="notice">
<strong>🌐 이 문서는 일본어 위키백과에서 기계 번역 되었습니다.</strong> 정확한 내용이 필요한 경우, <a href="{original_url}" target="_blank">원문</a>을 확인해 주세요.
<div class="meta">
<span class="meta-item">최종 수정일: {revised} (원문 조회시점 기준)</span>
<span class="meta-item">저작권 정보: <a href="{license}" target="_blank">CC BY-SA 4.0</a></span>
<span class="powered-by"><a href="{project}">🇯🇵 &rsaquo; 🇰🇷 {site}</a> 제공</span>
</div>
</div>
<div class="header">
<h1 class="header-title">{title}</h1>
</div>
<div class="content">
<div id="mw-content-text" class="mw-body-content">{html}</div>
</div>
</body>
</html>
"#,
        title = title,
        site = SITE_NAME,
        original_url = original_url,
        revised = revised,
        license = LICENSE_URL,
        project = PROJECT_URL,
        html = record.html,
    )
}
