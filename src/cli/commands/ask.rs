//! Ask command implementation.

use super::open_video;
use crate::cli::preflight;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(
    url: &str,
    question: &str,
    api_key: Option<&str>,
    model: Option<String>,
    settings: Settings,
) -> Result<()> {
    if question.trim().is_empty() {
        Output::warning("Ask a question about the video content.");
        return Ok(());
    }

    let credential = preflight::resolve_credential(api_key, &settings);
    let session = open_video(url, credential, model, &settings).await?;

    let spinner = Output::spinner("Thinking...");

    match session.answer(question).await {
        Ok(answer) => {
            spinner.finish_and_clear();
            Output::answer(question, &answer.text);
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate answer: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
