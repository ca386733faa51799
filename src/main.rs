use anyhow::{Context, Result};
use clap::Parser;
use profile_analyzer::cli::{handle_command, Cli};
use profile_analyzer::core::config_manager::LoggingConfig;
use profile_analyzer::core::ConfigManager;
use std::fs::OpenOptions;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConfigManager::load()?;
    init_logging(&config.logging)?;

    handle_command(cli, config).await
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match &logging.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(file)
                        .with_current_span(false)
                        .with_span_list(false),
                )
                .init();
        }
        // stdout is reserved for analysis output
        None => registry.with(fmt::layer().with_writer(std::io::stderr)).init(),
    }

    Ok(())
}
