//! SEO Research Types

use crate::mock::random::choose;
use crate::mock::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 検索トレンド
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Up, Trend::Down, Trend::Stable];

    /// ランダムに選択
    pub fn draw(random: &dyn RandomSource) -> Self {
        *choose(random, &Self::ALL)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 競合度
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Competition {
    Low,
    Medium,
    High,
}

impl Competition {
    pub const ALL: [Competition; 3] = [Competition::Low, Competition::Medium, Competition::High];

    /// ランダムに選択
    pub fn draw(random: &dyn RandomSource) -> Self {
        *choose(random, &Self::ALL)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Competition::Low => "low",
            Competition::Medium => "medium",
            Competition::High => "high",
        }
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// キーワード指標
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordMetrics {
    pub keyword: String,
    pub search_volume: u64,
    pub difficulty: u32,
    /// 小数点以下2桁に丸め済み
    pub cpc: f64,
    pub competition: Competition,
    pub trend: Trend,
}

/// 競合ドメイン
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Competitor {
    pub domain: String,
    pub ranking_keywords: u64,
    pub organic_traffic: u64,
    pub domain_authority: u32,
}

/// キーワードリサーチ結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeoResearchResult {
    pub primary_keyword: KeywordMetrics,
    /// 検索ボリューム降順
    pub related_keywords: Vec<KeywordMetrics>,
    pub content_suggestions: Vec<String>,
    pub competitors: Vec<Competitor>,
    pub research_date: String,
    /// related_keywords + content_suggestions の件数
    pub total_opportunities: usize,
}

/// 一括リサーチ結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkResearchResult {
    pub results: Vec<SeoResearchResult>,
    pub processed_count: usize,
    /// スキップされた要素を含む入力件数
    pub total_keywords: usize,
}

/// CSVエクスポート結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsvExport {
    pub csv_content: String,
    pub filename: String,
}
