//! SEO Trends
//!
//! 固定のトレンドキーワード・業界インサイト・アルゴリズム更新情報

use crate::mock::Clock;
use serde::Serialize;

/// トレンドキーワード
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TrendingKeyword {
    pub keyword: &'static str,
    pub growth: &'static str,
}

/// アルゴリズム更新
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AlgorithmUpdate {
    pub name: &'static str,
    pub date: &'static str,
    pub impact: &'static str,
    pub description: &'static str,
}

pub const TRENDING_KEYWORDS: [TrendingKeyword; 5] = [
    TrendingKeyword {
        keyword: "AI content generation",
        growth: "+150%",
    },
    TrendingKeyword {
        keyword: "voice search optimization",
        growth: "+89%",
    },
    TrendingKeyword {
        keyword: "mobile-first indexing",
        growth: "+67%",
    },
    TrendingKeyword {
        keyword: "core web vitals",
        growth: "+45%",
    },
    TrendingKeyword {
        keyword: "featured snippets",
        growth: "+34%",
    },
];

pub const INDUSTRY_INSIGHTS: [&str; 5] = [
    "AI-powered content is becoming increasingly important for SEO",
    "Voice search queries are growing by 35% year-over-year",
    "Page experience signals now impact rankings significantly",
    "E-A-T (Expertise, Authoritativeness, Trustworthiness) remains crucial",
    "Local SEO continues to drive business growth",
];

pub const ALGORITHM_UPDATES: [AlgorithmUpdate; 2] = [
    AlgorithmUpdate {
        name: "Helpful Content Update",
        date: "2024-06-15",
        impact: "High",
        description: "Focuses on rewarding content created for people, not search engines",
    },
    AlgorithmUpdate {
        name: "Core Update",
        date: "2024-05-20",
        impact: "Medium",
        description: "Broad improvements to ranking systems",
    },
];

/// トレンドレポート
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrendsReport {
    pub trending_keywords: Vec<TrendingKeyword>,
    pub industry_insights: Vec<&'static str>,
    pub algorithm_updates: Vec<AlgorithmUpdate>,
    pub last_updated: String,
}

/// 現在時刻付きのトレンドレポートを作成
pub fn current_trends(clock: &dyn Clock) -> TrendsReport {
    TrendsReport {
        trending_keywords: TRENDING_KEYWORDS.to_vec(),
        industry_insights: INDUSTRY_INSIGHTS.to_vec(),
        algorithm_updates: ALGORITHM_UPDATES.to_vec(),
        last_updated: clock.now_iso(),
    }
}
