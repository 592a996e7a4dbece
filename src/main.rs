use clap::Parser;
use contentscale::logging::{init_logging, LogConfig};
use contentscale::{serve, AppConfig, CliArgs};
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();

    if cli.generate_config {
        let path = Path::new("contentscale.toml.example");
        AppConfig::write_sample(path)?;
        println!("📝 サンプル設定ファイルを生成しました: {}", path.display());
        println!("💡 このファイルを contentscale.toml にコピーして編集してください");
        return Ok(());
    }

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    config.validate()?;

    // ファイル出力時は guard を main の終了まで保持
    let _guard = init_logging(&LogConfig::from_server_config(&config.server))?;

    info!(
        content_delay_ms = config.simulation.content_delay_ms,
        research_delay_ms = config.simulation.research_delay_ms,
        seeded = config.simulation.seed.is_some(),
        "configuration loaded"
    );

    serve(&config).await?;
    Ok(())
}
