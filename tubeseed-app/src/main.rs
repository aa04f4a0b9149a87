use anyhow::{Context, Result};
use clap::Parser;
use tubeseed_app::settings::{load_settings, open_seed_source};
use tubeseed_app::{run, AppConfig, Cli};
use tubeseed_common::observability::{init_logging, LogConfig, LogFormat};
use tubeseed_youtube::YouTubeApi;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LogConfig {
        format: LogFormat::from_env(),
        ..LogConfig::default()
    })?;

    // Flags win, then TUBESEED__ env, then the settings file.
    let settings = load_settings(cli.config.as_deref())?;
    let config = AppConfig::resolve(&cli, settings)?;

    let input = open_seed_source(config.seed.as_deref())?;
    let api = YouTubeApi::with_base_url(
        &config.api_base,
        config.developer_key.clone(),
        config.search.clone(),
    )
    .context("failed to build YouTube client")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run(&api, input, &mut out, &config.display).await?;

    tracing::info!(
        seeds = summary.seeds,
        failed = summary.failed,
        "tubeseed.run.complete"
    );
    Ok(())
}
