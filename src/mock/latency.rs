//! Simulated Latency
//!
//! 外部生成バックエンドの応答待ちを模した遅延

use async_trait::async_trait;
use std::time::Duration;

/// 遅延戦略トレイト
#[async_trait]
pub trait Latency: Send + Sync {
    /// 遅延を実行
    async fn wait(&self);
}

/// 遅延なし（テスト・ベンチ用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl Latency for NoDelay {
    async fn wait(&self) {}
}

/// 固定遅延
///
/// `tokio::time::sleep` を使うため、待機中も他のリクエストはブロックされない
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    duration: Duration,
}

impl FixedDelay {
    /// 新規遅延を作成
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// ミリ秒指定で作成
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// 設定された遅延時間
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[async_trait]
impl Latency for FixedDelay {
    async fn wait(&self) {
        if !self.duration.is_zero() {
            tokio::time::sleep(self.duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_no_delay_returns_immediately() {
        let start = Instant::now();
        NoDelay.wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_fixed_delay_sleeps_for_duration() {
        let delay = FixedDelay::from_millis(20);
        assert_eq!(delay.duration(), Duration::from_millis(20));

        let start = Instant::now();
        delay.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_zero_delay_is_a_no_op() {
        let start = Instant::now();
        FixedDelay::from_millis(0).wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
