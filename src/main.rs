//! tldw CLI entry point.

use anyhow::Result;
use clap::Parser;
use tldw::cli::{commands, Cli, Commands};
use tldw::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("tldw={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let api_key = cli.api_key.as_deref();

    // Execute command
    match &cli.command {
        Commands::Shell { url } => {
            commands::run_shell(url.clone(), api_key, cli.model.clone(), settings).await?;
        }

        Commands::Summarize { url } => {
            commands::run_summarize(url, api_key, cli.model.clone(), settings).await?;
        }

        Commands::Ask { url, question } => {
            commands::run_ask(url, question, api_key, cli.model.clone(), settings).await?;
        }

        Commands::Transcript { url, format } => {
            commands::run_transcript(url, *format, api_key, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, cli.config.as_deref(), settings)?;
        }
    }

    Ok(())
}
