//! Clock
//!
//! タイムスタンプ生成用の時刻ソース

use chrono::{Local, NaiveDateTime};

/// ISO 8601 形式（マイクロ秒精度）
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// 時刻ソーストレイト
pub trait Clock: Send + Sync {
    /// 現在のローカル時刻
    fn now(&self) -> NaiveDateTime;

    /// 現在時刻を ISO 8601 文字列で取得
    fn now_iso(&self) -> String {
        self.now().format(ISO_FORMAT).to_string()
    }
}

/// システム時刻
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// 固定時刻（テスト用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// "June 29, 2024" 形式の日付
pub fn long_date(at: &NaiveDateTime) -> String {
    at.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed() -> FixedClock {
        let at = NaiveDate::from_ymd_opt(2024, 6, 29)
            .and_then(|d| d.and_hms_opt(10, 5, 0))
            .unwrap();
        FixedClock(at)
    }

    #[test]
    fn test_fixed_clock_iso() {
        assert_eq!(fixed().now_iso(), "2024-06-29T10:05:00.000000");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(&fixed().now()), "June 29, 2024");

        let early = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        assert_eq!(long_date(&early), "March 05, 2024");
    }
}
