//! Content Generator
//!
//! テンプレートベースのモックコンテンツ生成（実際の生成バックエンドの代替）

use crate::content::history::{HistoryEntry, CONTENT_HISTORY};
use crate::content::template::ContentType;
use crate::error::{Error, Result};
use crate::mock::clock::long_date;
use crate::mock::{Clock, Latency, RandomSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// SEOスコアの範囲
pub const SEO_SCORE_RANGE: (i64, i64) = (70, 95);

/// コンテンツ生成リクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRequest {
    /// トピック
    pub topic: String,
    /// 要求されたコンテンツタイプ（未知の値は blog 扱い）
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

fn default_content_type() -> String {
    ContentType::default().into()
}

impl ContentRequest {
    /// 新規リクエストを作成
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            content_type: default_content_type(),
        }
    }

    /// コンテンツタイプを設定
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// テンプレート選択用のタイプと、応答に返すタイプ名
    ///
    /// 既知のタイプは前後の空白を除いた入力をそのまま返す
    pub fn resolve_content_type(&self) -> (ContentType, String) {
        let requested = self.content_type.trim();
        match ContentType::parse(requested) {
            Some(content_type) => (content_type, requested.to_string()),
            None => (ContentType::default(), default_content_type()),
        }
    }
}

/// 生成されたコンテンツ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentResult {
    /// 本文
    pub content: String,
    /// 単語数（本文から再計算）
    pub word_count: usize,
    /// SEOスコア (70-95)
    pub seo_score: u32,
    /// コンテンツタイプ（要求された表記）
    pub content_type: String,
    /// トピック
    pub topic: String,
    /// 生成日時
    pub generated_at: String,
}

/// 空白区切りの単語数
pub fn count_words(content: &str) -> usize {
    content.split_whitespace().count()
}

/// コンテンツ生成サービス
pub struct ContentService {
    random: Arc<dyn RandomSource>,
    latency: Arc<dyn Latency>,
    clock: Arc<dyn Clock>,
}

impl ContentService {
    /// 新規サービスを作成
    pub fn new(
        random: Arc<dyn RandomSource>,
        latency: Arc<dyn Latency>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            random,
            latency,
            clock,
        }
    }

    /// コンテンツを生成
    pub async fn generate(&self, request: &ContentRequest) -> Result<ContentResult> {
        let topic = request.topic.trim();
        if topic.is_empty() {
            return Err(Error::validation("Topic is required"));
        }

        let (content_type, label) = request.resolve_content_type();

        self.latency.wait().await;

        let now = self.clock.now();
        let mut data = HashMap::new();
        data.insert("topic", topic.to_string());
        data.insert("date", long_date(&now));
        data.insert("hashtag", topic.replace(' ', ""));

        let content = content_type.template().render(&data)?;
        let word_count = count_words(&content);
        let seo_score = self.draw_seo_score()?;

        info!(
            topic = %topic,
            content_type = %content_type,
            word_count,
            seo_score,
            "content generated"
        );

        Ok(ContentResult {
            content,
            word_count,
            seo_score,
            content_type: label,
            topic: topic.to_string(),
            generated_at: self.clock.now_iso(),
        })
    }

    fn draw_seo_score(&self) -> Result<u32> {
        let (low, high) = SEO_SCORE_RANGE;
        let score = self.random.int_in(low, high);
        if !(low..=high).contains(&score) {
            return Err(Error::Internal(format!(
                "SEO score {} outside {}..={}",
                score, low, high
            )));
        }
        Ok(score as u32)
    }

    /// 生成履歴を取得（固定データ）
    pub fn history(&self) -> Vec<HistoryEntry> {
        debug!(total = CONTENT_HISTORY.len(), "content history requested");
        CONTENT_HISTORY.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FixedClock, NoDelay, SeededRandom};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 呼び出し回数を数える遅延
    #[derive(Default)]
    struct CountingDelay(AtomicUsize);

    #[async_trait]
    impl Latency for CountingDelay {
        async fn wait(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// 範囲外の値を返す乱数
    struct BrokenRandom;

    impl RandomSource for BrokenRandom {
        fn int_in(&self, low: i64, _high: i64) -> i64 {
            low - 1
        }

        fn float_in(&self, low: f64, _high: f64) -> f64 {
            low
        }
    }

    fn fixed_clock() -> Arc<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2024, 6, 29)
            .and_then(|d| d.and_hms_opt(10, 5, 0))
            .unwrap();
        Arc::new(FixedClock(at))
    }

    fn service(seed: u64) -> ContentService {
        ContentService::new(
            Arc::new(SeededRandom::new(seed)),
            Arc::new(NoDelay),
            fixed_clock(),
        )
    }

    #[tokio::test]
    async fn test_generate_blog() {
        let result = service(1)
            .generate(&ContentRequest::new("  Cloud Security  "))
            .await
            .unwrap();

        assert_eq!(result.topic, "Cloud Security");
        assert_eq!(result.content_type, "blog");
        assert!(result.content.starts_with("# Cloud Security: A Comprehensive Guide"));
        assert!(result.content.contains("June 29, 2024"));
        assert_eq!(result.word_count, count_words(&result.content));
        assert!((70..=95).contains(&result.seo_score));
        assert_eq!(result.generated_at, "2024-06-29T10:05:00.000000");
    }

    #[tokio::test]
    async fn test_generate_every_type() {
        let service = service(2);
        for content_type in ContentType::ALL {
            let request = ContentRequest::new("Data Mesh").with_content_type(content_type);
            let result = service.generate(&request).await.unwrap();
            assert!(result.content.contains("Data Mesh"));
            assert_eq!(result.content_type, content_type.name());
            assert_eq!(result.word_count, result.content.split_whitespace().count());
        }
    }

    #[tokio::test]
    async fn test_empty_topic_is_rejected() {
        let err = service(3)
            .generate(&ContentRequest::new("   "))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Topic is required");
    }

    #[tokio::test]
    async fn test_seeded_generation_is_reproducible() {
        let request = ContentRequest::new("Rust").with_content_type(ContentType::Faq);
        let a = service(9).generate(&request).await.unwrap();
        let b = service(9).generate(&request).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_content_type_echoes_request() {
        let service = service(5);

        let request = ContentRequest::new("Email").with_content_type(" FAQ ");
        let result = service.generate(&request).await.unwrap();
        assert_eq!(result.content_type, "FAQ");
        assert!(result.content.starts_with("# Frequently Asked Questions: Email"));

        let request = ContentRequest::new("Email").with_content_type("video");
        let result = service.generate(&request).await.unwrap();
        assert_eq!(result.content_type, "blog");
        assert!(result.content.starts_with("# Email: A Comprehensive Guide"));
    }

    #[tokio::test]
    async fn test_generate_waits_once_per_call() {
        let delay = Arc::new(CountingDelay::default());
        let service = ContentService::new(
            Arc::new(SeededRandom::new(6)),
            delay.clone(),
            fixed_clock(),
        );

        service.generate(&ContentRequest::new("Latency")).await.unwrap();
        assert_eq!(delay.0.load(Ordering::SeqCst), 1);
        service.generate(&ContentRequest::new("Latency")).await.unwrap();
        assert_eq!(delay.0.load(Ordering::SeqCst), 2);

        // 検証エラー時は待機しない
        let _ = service.generate(&ContentRequest::new(" ")).await;
        assert_eq!(delay.0.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_internal_error() {
        let service = ContentService::new(Arc::new(BrokenRandom), Arc::new(NoDelay), fixed_clock());
        let err = service
            .generate(&ContentRequest::new("Broken"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Internal(_)));
        assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_history_is_static() {
        let service = service(4);
        let first = service.history();
        assert_eq!(first.len(), 2);
        assert_eq!(first, service.history());
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("one  two\nthree\t four"), 4);
        assert_eq!(count_words("   "), 0);
    }
}
