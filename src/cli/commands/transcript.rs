//! Transcript command implementation.

use super::open_video;
use crate::cli::preflight;
use crate::cli::{Output, TranscriptFormat};
use crate::config::Settings;
use anyhow::Result;

/// Run the transcript command.
pub async fn run_transcript(
    url: &str,
    format: TranscriptFormat,
    api_key: Option<&str>,
    settings: Settings,
) -> Result<()> {
    let credential = preflight::resolve_credential(api_key, &settings);
    let session = open_video(url, credential, None, &settings).await?;
    let transcript = session.transcript()?;

    match format {
        TranscriptFormat::Text => Output::transcript(transcript),
        TranscriptFormat::Json => println!("{}", transcript.to_json()?),
    }

    Ok(())
}
