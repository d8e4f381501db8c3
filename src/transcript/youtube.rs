//! YouTube caption provider.

use super::{CaptionFragment, TranscriptFailure, TranscriptProvider};
use crate::config::TranscriptSettings;
use crate::error::{Result, TldwError};
use async_trait::async_trait;
use tracing::{debug, instrument};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Caption provider backed by YouTube's transcript endpoints.
pub struct YoutubeTranscriptProvider {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YoutubeTranscriptProvider {
    /// Create a provider from transcript settings.
    pub fn with_config(settings: &TranscriptSettings) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            TldwError::Config(format!("Failed to initialise transcript client: {}", e))
        })?;

        Ok(Self {
            api,
            languages: settings.languages.clone(),
            preserve_formatting: settings.preserve_formatting,
        })
    }
}

#[async_trait]
impl TranscriptProvider for YoutubeTranscriptProvider {
    #[instrument(skip(self))]
    async fn fetch_fragments(
        &self,
        video_id: &str,
    ) -> std::result::Result<Vec<CaptionFragment>, TranscriptFailure> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| TranscriptFailure::Provider(e.to_string()))?;

        debug!(
            "Captions for {} in {} (generated: {})",
            video_id, transcript.language_code, transcript.is_generated
        );

        Ok(transcript
            .snippets
            .into_iter()
            .map(|s| CaptionFragment {
                text: s.text,
                start: s.start,
                duration: s.duration,
            })
            .collect())
    }
}
