//! CSV Export
//!
//! リサーチ結果（またはその部分集合）のCSV化
//!
//! フィールドはエスケープせずにカンマで連結する。キーワードにカンマや改行が
//! 含まれる場合は列がずれる

use crate::error::{Error, Result};
use crate::seo::types::CsvExport;
use chrono::NaiveDateTime;
use serde_json::Value;

/// CSVヘッダー行
pub const CSV_HEADER: &str = "Keyword,Search Volume,Difficulty,CPC,Competition,Trend";

/// (フィールド名, 欠損時の値)
const COLUMNS: [(&str, &str); 6] = [
    ("keyword", ""),
    ("search_volume", "0"),
    ("difficulty", "0"),
    ("cpc", "0"),
    ("competition", ""),
    ("trend", ""),
];

/// 値が空とみなせるか（null・空オブジェクト・空配列・空文字・false・0）
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn field(record: &serde_json::Map<String, Value>, key: &str, default: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn csv_row(record: &serde_json::Map<String, Value>) -> String {
    COLUMNS
        .iter()
        .map(|(key, default)| field(record, key, default))
        .collect::<Vec<_>>()
        .join(",")
}

/// エクスポートファイル名
pub fn export_filename(at: &NaiveDateTime) -> String {
    format!("seo_research_{}.csv", at.format("%Y%m%d_%H%M%S"))
}

/// リサーチデータをCSVに変換
///
/// `primary_keyword`（あれば）を先頭行に、続いて `related_keywords` を1件1行で出力する
pub fn export_csv(data: &Value, at: NaiveDateTime) -> Result<CsvExport> {
    if is_blank(data) {
        return Err(Error::validation("Research data is required"));
    }
    let Some(research) = data.as_object() else {
        return Err(Error::validation("Research data must be a JSON object"));
    };

    let mut csv_content = String::from(CSV_HEADER);
    csv_content.push('\n');

    if let Some(Value::Object(primary)) = research.get("primary_keyword") {
        if !primary.is_empty() {
            csv_content.push_str(&csv_row(primary));
            csv_content.push('\n');
        }
    }

    if let Some(Value::Array(related)) = research.get("related_keywords") {
        for record in related.iter().filter_map(Value::as_object) {
            csv_content.push_str(&csv_row(record));
            csv_content.push('\n');
        }
    }

    Ok(CsvExport {
        csv_content,
        filename: export_filename(&at),
    })
}
