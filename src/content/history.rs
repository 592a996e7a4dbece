//! Content History
//!
//! 永続化層が入るまでの固定履歴データ

use serde::Serialize;

/// 履歴エントリ
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: u32,
    pub topic: &'static str,
    pub content_type: &'static str,
    pub word_count: u32,
    pub seo_score: u32,
    pub generated_at: &'static str,
    pub status: &'static str,
}

/// 固定履歴
pub const CONTENT_HISTORY: [HistoryEntry; 2] = [
    HistoryEntry {
        id: 1,
        topic: "Cybersecurity Best Practices",
        content_type: "blog",
        word_count: 2790,
        seo_score: 75,
        generated_at: "2024-06-29T10:05:00",
        status: "completed",
    },
    HistoryEntry {
        id: 2,
        topic: "Digital Marketing Trends",
        content_type: "article",
        word_count: 1850,
        seo_score: 82,
        generated_at: "2024-06-28T15:30:00",
        status: "completed",
    },
];
