//! Keyword Research
//!
//! キーワード指標・関連キーワード・競合データのモック合成

use crate::config::SeoConfig;
use crate::error::{Error, Result};
use crate::mock::random::round2;
use crate::mock::{Clock, Latency, RandomSource};
use crate::seo::export::export_csv;
use crate::seo::trends::{current_trends, TrendsReport};
use crate::seo::types::{
    BulkResearchResult, Competition, Competitor, CsvExport, KeywordMetrics, SeoResearchResult,
    Trend,
};
use futures::future::join_all;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// 関連キーワードのパターン（先頭8件を使用）
pub const RELATED_KEYWORD_PATTERNS: [&str; 10] = [
    "{keyword} guide",
    "{keyword} tips",
    "best {keyword}",
    "{keyword} strategy",
    "{keyword} tools",
    "{keyword} benefits",
    "how to {keyword}",
    "{keyword} examples",
    "{keyword} trends",
    "{keyword} analysis",
];

/// 使用する関連キーワード数
pub const RELATED_KEYWORD_COUNT: usize = 8;

/// コンテンツ提案のパターン
pub const CONTENT_SUGGESTION_PATTERNS: [&str; 8] = [
    "Ultimate Guide to {keyword}",
    "10 Best {keyword} Strategies for 2024",
    "How to Master {keyword}: Step-by-Step Tutorial",
    "{keyword} vs Alternatives: Complete Comparison",
    "Common {keyword} Mistakes to Avoid",
    "{keyword} Case Studies: Real Success Stories",
    "Future of {keyword}: Trends and Predictions",
    "{keyword} Tools and Resources Review",
];

/// 指標の乱数範囲
#[derive(Debug, Clone, Copy)]
pub struct MetricRanges {
    pub difficulty: (i64, i64),
    pub cpc: (f64, f64),
}

/// 主キーワードの範囲
pub const PRIMARY_RANGES: MetricRanges = MetricRanges {
    difficulty: (20, 90),
    cpc: (0.50, 15.00),
};

/// 関連キーワードの範囲
pub const RELATED_RANGES: MetricRanges = MetricRanges {
    difficulty: (15, 85),
    cpc: (0.30, 12.00),
};

/// 主キーワードの検索ボリューム
pub const BASE_VOLUME_RANGE: (i64, i64) = (100, 50_000);

/// 関連キーワードのボリューム揺らぎ
pub const VOLUME_OFFSET_RANGE: (i64, i64) = (-5_000, 5_000);

/// 負のボリュームになった場合の再抽選範囲
pub const FALLBACK_VOLUME_RANGE: (i64, i64) = (50, 1_000);

/// 競合ドメインの定義
#[derive(Debug, Clone, Copy)]
pub struct CompetitorProfile {
    pub domain: &'static str,
    pub ranking_keywords: (i64, i64),
    pub organic_traffic: (i64, i64),
    pub domain_authority: (i64, i64),
}

/// 固定の競合ドメイン
pub const COMPETITOR_PROFILES: [CompetitorProfile; 3] = [
    CompetitorProfile {
        domain: "example-competitor1.com",
        ranking_keywords: (150, 2_500),
        organic_traffic: (5_000, 50_000),
        domain_authority: (40, 85),
    },
    CompetitorProfile {
        domain: "example-competitor2.com",
        ranking_keywords: (200, 3_000),
        organic_traffic: (8_000, 60_000),
        domain_authority: (45, 90),
    },
    CompetitorProfile {
        domain: "example-competitor3.com",
        ranking_keywords: (100, 2_000),
        organic_traffic: (3_000, 40_000),
        domain_authority: (35, 80),
    },
];

fn interpolate(pattern: &str, keyword: &str) -> String {
    pattern.replace("{keyword}", keyword)
}

/// SEOリサーチサービス
pub struct SeoResearchService {
    random: Arc<dyn RandomSource>,
    latency: Arc<dyn Latency>,
    clock: Arc<dyn Clock>,
    config: SeoConfig,
}

impl SeoResearchService {
    /// 新規サービスを作成
    pub fn new(
        random: Arc<dyn RandomSource>,
        latency: Arc<dyn Latency>,
        clock: Arc<dyn Clock>,
        config: SeoConfig,
    ) -> Self {
        Self {
            random,
            latency,
            clock,
            config,
        }
    }

    /// エンドポイント向けのキーワード検証（最小文字数を含む）
    pub fn validate_keyword<'a>(&self, keyword: Option<&'a str>) -> Result<&'a str> {
        let keyword = keyword.map(str::trim).unwrap_or_default();
        if keyword.is_empty() {
            return Err(Error::validation("Keyword is required"));
        }
        if keyword.chars().count() < self.config.min_keyword_len {
            return Err(Error::validation(format!(
                "Keyword must be at least {} characters long",
                self.config.min_keyword_len
            )));
        }
        Ok(keyword)
    }

    /// キーワードリサーチを実行
    pub async fn research(&self, keyword: &str) -> Result<SeoResearchResult> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(Error::validation("Keyword is required"));
        }

        self.latency.wait().await;

        let result = self.synthesize(keyword);
        info!(
            keyword = %keyword,
            search_volume = result.primary_keyword.search_volume,
            related = result.related_keywords.len(),
            "keyword research completed"
        );
        Ok(result)
    }

    /// 一括リサーチを実行
    ///
    /// 文字列以外・空文字の要素はスキップする。結果は入力順を保つ
    pub async fn bulk_research(&self, keywords: &[Value]) -> Result<BulkResearchResult> {
        if keywords.is_empty() {
            return Err(Error::validation("Keywords array is required"));
        }
        if keywords.len() > self.config.max_bulk_keywords {
            return Err(Error::validation(format!(
                "Maximum {} keywords allowed per request",
                self.config.max_bulk_keywords
            )));
        }

        let accepted: Vec<&str> = keywords
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect();
        debug!(
            accepted = accepted.len(),
            skipped = keywords.len() - accepted.len(),
            parallel = self.config.parallel_bulk,
            "bulk research started"
        );

        let results = if self.config.parallel_bulk {
            join_all(accepted.iter().map(|k| self.research(k)))
                .await
                .into_iter()
                .collect::<Result<Vec<_>>>()?
        } else {
            let mut results = Vec::with_capacity(accepted.len());
            for keyword in &accepted {
                results.push(self.research(keyword).await?);
            }
            results
        };

        info!(
            processed = results.len(),
            total = keywords.len(),
            "bulk research completed"
        );

        Ok(BulkResearchResult {
            processed_count: results.len(),
            total_keywords: keywords.len(),
            results,
        })
    }

    /// リサーチデータをCSVに変換
    pub fn export_csv(&self, data: &Value) -> Result<CsvExport> {
        export_csv(data, self.clock.now())
    }

    /// リサーチ結果をCSVに変換
    pub fn export_result(&self, result: &SeoResearchResult) -> Result<CsvExport> {
        let value = serde_json::to_value(result)?;
        self.export_csv(&value)
    }

    /// SEOトレンドを取得（固定データ）
    pub fn trends(&self) -> TrendsReport {
        current_trends(self.clock.as_ref())
    }

    fn synthesize(&self, keyword: &str) -> SeoResearchResult {
        let random = self.random.as_ref();

        let base_volume = random.int_in(BASE_VOLUME_RANGE.0, BASE_VOLUME_RANGE.1);
        let difficulty = random.int_in(PRIMARY_RANGES.difficulty.0, PRIMARY_RANGES.difficulty.1);
        let cpc = round2(random.float_in(PRIMARY_RANGES.cpc.0, PRIMARY_RANGES.cpc.1));

        let mut related_keywords: Vec<KeywordMetrics> = RELATED_KEYWORD_PATTERNS
            .iter()
            .take(RELATED_KEYWORD_COUNT)
            .map(|pattern| self.related_metrics(interpolate(pattern, keyword), base_volume))
            .collect();
        related_keywords.sort_by(|a, b| b.search_volume.cmp(&a.search_volume));

        let content_suggestions: Vec<String> = CONTENT_SUGGESTION_PATTERNS
            .iter()
            .map(|pattern| interpolate(pattern, keyword))
            .collect();

        let competitors = COMPETITOR_PROFILES
            .iter()
            .map(|profile| Competitor {
                domain: profile.domain.to_string(),
                ranking_keywords: random
                    .int_in(profile.ranking_keywords.0, profile.ranking_keywords.1)
                    as u64,
                organic_traffic: random.int_in(profile.organic_traffic.0, profile.organic_traffic.1)
                    as u64,
                domain_authority: random
                    .int_in(profile.domain_authority.0, profile.domain_authority.1)
                    as u32,
            })
            .collect();

        let primary_keyword = KeywordMetrics {
            keyword: keyword.to_string(),
            search_volume: base_volume as u64,
            difficulty: difficulty as u32,
            cpc,
            competition: Competition::draw(random),
            trend: Trend::draw(random),
        };

        let total_opportunities = related_keywords.len() + content_suggestions.len();

        SeoResearchResult {
            primary_keyword,
            related_keywords,
            content_suggestions,
            competitors,
            research_date: self.clock.now_iso(),
            total_opportunities,
        }
    }

    fn related_metrics(&self, keyword: String, base_volume: i64) -> KeywordMetrics {
        let random = self.random.as_ref();

        let mut volume = base_volume + random.int_in(VOLUME_OFFSET_RANGE.0, VOLUME_OFFSET_RANGE.1);
        if volume < 0 {
            volume = random.int_in(FALLBACK_VOLUME_RANGE.0, FALLBACK_VOLUME_RANGE.1);
        }

        KeywordMetrics {
            keyword,
            search_volume: volume as u64,
            difficulty: random.int_in(RELATED_RANGES.difficulty.0, RELATED_RANGES.difficulty.1)
                as u32,
            cpc: round2(random.float_in(RELATED_RANGES.cpc.0, RELATED_RANGES.cpc.1)),
            trend: Trend::draw(random),
            competition: Competition::draw(random),
        }
    }
}
