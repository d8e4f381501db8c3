//! Summarize command implementation.

use super::open_video;
use crate::cli::preflight;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the summarize command.
pub async fn run_summarize(
    url: &str,
    api_key: Option<&str>,
    model: Option<String>,
    settings: Settings,
) -> Result<()> {
    let credential = preflight::resolve_credential(api_key, &settings);
    let session = open_video(url, credential, model, &settings).await?;

    let spinner = Output::spinner("Analyzing video content...");

    match session.summarize().await {
        Ok(summary) => {
            spinner.finish_and_clear();
            Output::summary(&summary.text);
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate summary: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
