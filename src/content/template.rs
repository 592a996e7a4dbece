//! Template Engine
//!
//! コンテンツタイプ別の固定テンプレートと `{{name}}` 形式のプレースホルダー置換

use crate::error::{Error, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

const BLOG_TEMPLATE: &str = include_str!("templates/blog.md");
const ARTICLE_TEMPLATE: &str = include_str!("templates/article.md");
const FAQ_TEMPLATE: &str = include_str!("templates/faq.md");
const SOCIAL_TEMPLATE: &str = include_str!("templates/social.md");

/// コンテンツタイプ
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// ブログ記事
    #[default]
    Blog,
    /// 解説記事
    Article,
    /// FAQ
    Faq,
    /// ソーシャル投稿（3本立て）
    Social,
}

impl ContentType {
    /// 全タイプ
    pub const ALL: [ContentType; 4] = [
        ContentType::Blog,
        ContentType::Article,
        ContentType::Faq,
        ContentType::Social,
    ];

    /// タイプ名を取得
    pub fn name(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Article => "article",
            ContentType::Faq => "faq",
            ContentType::Social => "social",
        }
    }

    /// 大文字小文字を区別せずに解析
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(value))
    }

    /// 不明な値は Blog
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// 対応するテンプレートを取得
    pub fn template(&self) -> ContentTemplate {
        let body = match self {
            ContentType::Blog => BLOG_TEMPLATE,
            ContentType::Article => ARTICLE_TEMPLATE,
            ContentType::Faq => FAQ_TEMPLATE,
            ContentType::Social => SOCIAL_TEMPLATE,
        };
        let mut required_fields = vec!["topic", "date"];
        if *self == ContentType::Social {
            required_fields.push("hashtag");
        }
        ContentTemplate {
            content_type: *self,
            body,
            required_fields,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        content_type.name().to_string()
    }
}

/// コンテンツテンプレート
#[derive(Debug, Clone)]
pub struct ContentTemplate {
    /// テンプレートタイプ
    pub content_type: ContentType,
    /// テンプレート本文
    pub body: &'static str,
    /// 必須フィールド
    pub required_fields: Vec<&'static str>,
}

impl ContentTemplate {
    /// 必須フィールドを検証
    pub fn validate_fields(&self, data: &HashMap<&str, String>) -> Result<()> {
        for field in &self.required_fields {
            if !data.contains_key(field) {
                return Err(Error::Template(format!(
                    "Required field '{}' is missing",
                    field
                )));
            }
        }
        Ok(())
    }

    /// テンプレートを適用
    pub fn render(&self, data: &HashMap<&str, String>) -> Result<String> {
        self.validate_fields(data)?;
        render_placeholders(self.body, data)
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{(\w+)\}\}").unwrap_or_else(|e| panic!("invalid placeholder regex: {e}"))
    })
}

/// `{{name}}` を一括置換する
///
/// 置換は1パスで行うため、差し込まれた値に含まれる `{{...}}` は再展開されない
pub fn render_placeholders(template: &str, data: &HashMap<&str, String>) -> Result<String> {
    let mut missing: Option<String> = None;
    let rendered = placeholder_pattern().replace_all(template, |caps: &Captures| {
        let name = &caps[1];
        match data.get(name) {
            Some(value) => value.clone(),
            None => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(name) => Err(Error::Template(format!("unknown placeholder '{}'", name))),
        None => Ok(rendered.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(topic: &str) -> HashMap<&'static str, String> {
        let mut data = HashMap::new();
        data.insert("topic", topic.to_string());
        data.insert("date", "June 29, 2024".to_string());
        data.insert("hashtag", topic.replace(' ', ""));
        data
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(ContentType::parse_or_default(Some("FAQ")), ContentType::Faq);
        assert_eq!(ContentType::parse_or_default(Some(" Social ")), ContentType::Social);
        assert_eq!(ContentType::parse_or_default(Some("article")), ContentType::Article);
        assert_eq!(ContentType::parse_or_default(Some("video")), ContentType::Blog);
        assert_eq!(ContentType::parse_or_default(Some("")), ContentType::Blog);
        assert_eq!(ContentType::parse_or_default(None), ContentType::Blog);
        assert_eq!(ContentType::parse(" faq "), Some(ContentType::Faq));
        assert_eq!(ContentType::parse("video"), None);
    }

    #[test]
    fn test_every_template_renders() {
        for content_type in ContentType::ALL {
            let rendered = content_type.template().render(&data("Edge Computing")).unwrap();
            assert!(rendered.contains("Edge Computing"));
            assert!(!rendered.contains("{{"));
        }
    }

    #[test]
    fn test_social_hashtag_strips_spaces() {
        let rendered = ContentType::Social
            .template()
            .render(&data("Edge Computing"))
            .unwrap();
        assert!(rendered.contains("#EdgeComputing"));
        assert!(rendered.contains("THREAD: Edge Computing Essentials"));
        assert!(rendered.contains("HOT TAKE: Edge Computing"));
    }

    #[test]
    fn test_dated_closing_lines() {
        let d = data("SEO");
        assert!(ContentType::Blog
            .template()
            .render(&d)
            .unwrap()
            .contains("*This content was generated on June 29, 2024"));
        assert!(ContentType::Article
            .template()
            .render(&d)
            .unwrap()
            .contains("*Published: June 29, 2024*"));
        assert!(ContentType::Faq
            .template()
            .render(&d)
            .unwrap()
            .contains("*Last updated: June 29, 2024*"));
    }

    #[test]
    fn test_topic_is_not_reexpanded() {
        let rendered = ContentType::Blog.template().render(&data("{{date}}")).unwrap();
        assert!(rendered.starts_with("# {{date}}: A Comprehensive Guide"));
    }

    #[test]
    fn test_missing_field_is_template_error() {
        let mut d = data("SEO");
        d.remove("date");
        let err = ContentType::Article.template().render(&d).unwrap_err();
        assert!(matches!(err, Error::Template(_)));

        let err = render_placeholders("{{nope}}", &HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
