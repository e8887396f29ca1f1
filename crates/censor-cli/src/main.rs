mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use censor_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for statistics
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }),
    };

    commands::redact::handle(cli, &config).await
}
