//! Content Generation Module
//!
//! トピックとコンテンツタイプからモックコンテンツを生成

pub mod generator;
pub mod history;
pub mod template;

pub use generator::{count_words, ContentRequest, ContentResult, ContentService};
pub use history::{HistoryEntry, CONTENT_HISTORY};
pub use template::{ContentTemplate, ContentType};
