use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// ログファイル名のプレフィックス
pub const LOG_FILE_NAME: &str = "contentscale.log";

/// ログ設定
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// ログレベル (trace, debug, info, warn, error) または EnvFilter 構文
    pub level: String,
    /// ログディレクトリ（None の場合はファイル出力なし）
    pub log_dir: Option<PathBuf>,
    /// ファイルローテーション設定
    pub rotation: LogRotation,
    /// JSON 形式で出力
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRotation {
    /// 日次ローテーション
    Daily,
    /// 時間毎ローテーション
    Hourly,
    /// ローテーションなし
    Never,
}

impl LogRotation {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            rotation: LogRotation::Daily,
            json: false,
        }
    }
}

impl LogConfig {
    /// 設定からログ設定を作成
    pub fn from_server_config(server_config: &crate::config::ServerConfig) -> Self {
        Self {
            level: server_config.log_level.clone(),
            log_dir: server_config.log_dir.clone(),
            rotation: LogRotation::parse(&server_config.log_rotation),
            json: server_config.log_json,
        }
    }
}

/// ログディレクトリを確保
fn ensure_log_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// ログシステムを初期化
///
/// ファイル出力時は返された `WorkerGuard` を保持し続ける必要がある
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let mut layers = Vec::new();

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);
    if config.json {
        layers.push(console.json().boxed());
    } else {
        layers.push(console.boxed());
    }

    let mut guard = None;
    if let Some(log_dir) = &config.log_dir {
        ensure_log_dir(log_dir)?;
        let file_appender = match config.rotation {
            LogRotation::Daily => rolling::daily(log_dir, LOG_FILE_NAME),
            LogRotation::Hourly => rolling::hourly(log_dir, LOG_FILE_NAME),
            LogRotation::Never => rolling::never(log_dir, LOG_FILE_NAME),
        };
        let (writer, worker_guard) = non_blocking(file_appender);
        guard = Some(worker_guard);

        let file = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        if config.json {
            layers.push(file.json().boxed());
        } else {
            layers.push(file.boxed());
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    tracing::info!("📝 ログシステム初期化完了");
    tracing::info!("📊 ログレベル: {}", config.level);
    match &config.log_dir {
        Some(dir) => tracing::info!("📂 ログディレクトリ: {}", dir.display()),
        None => tracing::info!("💻 コンソール出力のみ"),
    }

    Ok(guard)
}
