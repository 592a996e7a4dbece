use crate::error::{Error, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイルの探索順
pub const CONFIG_PATHS: [&str; 3] = [
    "contentscale.toml",
    "config.toml",
    "config/contentscale.toml",
];

/// 環境変数のプレフィックス (例: CONTENTSCALE_SERVER__BIND_ADDR)
pub const ENV_PREFIX: &str = "CONTENTSCALE";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub simulation: SimulationConfig,
    pub seo: SeoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub log_level: String,
    /// 指定時のみファイルにもログを出力
    pub log_dir: Option<PathBuf>,
    pub log_rotation: String,
    pub log_json: bool,
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            log_level: "info".to_string(),
            log_dir: None,
            log_rotation: "daily".to_string(),
            log_json: false,
            cors: true,
        }
    }
}

/// 疑似レイテンシと乱数の設定
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    pub content_delay_ms: u64,
    pub research_delay_ms: u64,
    /// 指定時はシード固定の乱数を使用
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            content_delay_ms: 2000,
            research_delay_ms: 1500,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeoConfig {
    pub min_keyword_len: usize,
    pub max_bulk_keywords: usize,
    /// 一括リサーチを並行実行する
    pub parallel_bulk: bool,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            min_keyword_len: 2,
            max_bulk_keywords: 100,
            parallel_bulk: true,
        }
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "contentscale", about = "Mock content generation and SEO research API", version)]
pub struct CliArgs {
    #[arg(long, value_name = "FILE", help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "CONTENTSCALE_BIND",
        value_name = "ADDR",
        help = "Address to listen on"
    )]
    pub bind: Option<String>,

    #[arg(long, value_name = "LEVEL", help = "Log filter (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,

    #[arg(long, help = "Disable simulated processing delays")]
    pub no_delay: bool,

    #[arg(long, value_name = "N", help = "Seed for reproducible mock metrics")]
    pub seed: Option<u64>,

    #[arg(long, help = "Write contentscale.toml.example and exit")]
    pub generate_config: bool,
}

impl AppConfig {
    /// 設定ファイルから読み込み、環境変数で上書き
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // デフォルト値を設定
        settings = settings.add_source(config::Config::try_from(&AppConfig::default())?);

        match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                tracing::debug!("設定ファイルを読み込み: {}", path.display());
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                // 最初に見つかったファイルのみ使用
                if let Some(path) = CONFIG_PATHS.iter().find(|p| Path::new(p).exists()) {
                    tracing::debug!("設定ファイルを読み込み: {}", path);
                    settings = settings.add_source(config::File::with_name(path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// コマンドライン引数で上書き
    pub fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(bind) = &args.bind {
            self.server.bind_addr = bind.clone();
        }
        if let Some(level) = &args.log_level {
            self.server.log_level = level.clone();
        }
        if args.no_delay {
            self.simulation.content_delay_ms = 0;
            self.simulation.research_delay_ms = 0;
        }
        if args.seed.is_some() {
            self.simulation.seed = args.seed;
        }
    }

    /// 起動前の検証
    pub fn validate(&self) -> Result<()> {
        if self.server.bind_addr.trim().is_empty() {
            return Err(Error::Config("server.bind_addr must not be empty".to_string()));
        }
        if self.seo.min_keyword_len == 0 {
            return Err(Error::Config("seo.min_keyword_len must be at least 1".to_string()));
        }
        if self.seo.max_bulk_keywords == 0 {
            return Err(Error::Config(
                "seo.max_bulk_keywords must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// サンプル設定ファイルの内容を生成
    pub fn sample_toml() -> Result<String> {
        let toml_content = toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(format!(
            r#"# contentscale configuration
#
# contentscale.toml として保存してください
# 環境変数での上書きも可能です (例: CONTENTSCALE_SERVER__BIND_ADDR=0.0.0.0:5000)

{}
# 設定説明:
#
# [server]
# bind_addr = HTTP サーバーのバインドアドレス
# log_level = ログレベル (trace, debug, info, warn, error)
# log_dir = 指定するとファイルにもログを出力
# log_rotation = daily, hourly, never
#
# [simulation]
# content_delay_ms / research_delay_ms = 疑似処理時間 (0 で無効)
# seed = モック指標の乱数シード
#
# [seo]
# max_bulk_keywords = 一括リサーチの上限件数
"#,
            toml_content
        ))
    }

    /// サンプル設定ファイルを書き出し
    pub fn write_sample(path: &Path) -> Result<()> {
        std::fs::write(path, Self::sample_toml()?)?;
        Ok(())
    }
}
