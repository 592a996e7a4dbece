//! SEO Research Module
//!
//! キーワードリサーチ・一括リサーチ・CSVエクスポート・トレンド情報

pub mod export;
pub mod research;
pub mod trends;
pub mod types;

pub use export::{export_csv, CSV_HEADER};
pub use research::SeoResearchService;
pub use trends::{current_trends, TrendsReport};
pub use types::{
    BulkResearchResult, Competition, Competitor, CsvExport, KeywordMetrics, SeoResearchResult,
    Trend,
};
