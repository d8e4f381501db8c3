//! Caption retrieval for YouTube videos.
//!
//! A [`TranscriptProvider`] returns the raw caption fragments for a video, and
//! the [`TranscriptFetcher`] turns them into a single [`Transcript`]. Every kind
//! of failure is folded into [`TranscriptUnavailable`], which carries the
//! underlying cause for logs but always displays the same message.

mod youtube;

pub use youtube::YoutubeTranscriptProvider;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Message shown whenever a transcript cannot be retrieved.
pub const NO_TRANSCRIPT_MESSAGE: &str = "Could not retrieve transcript. Note: This tool only works on videos that have Closed Captions/Subtitles enabled.";

/// One timed caption snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionFragment {
    /// Caption text.
    pub text: String,
    /// Start offset in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

impl CaptionFragment {
    /// Create an untimed fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: 0.0,
            duration: 0.0,
        }
    }
}

/// The full caption text of one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Video ID.
    pub video_id: String,
    /// All fragments, in caption order, joined with single spaces.
    pub text: String,
    /// Number of fragments the text was built from.
    pub fragment_count: usize,
}

impl Transcript {
    /// Join caption fragments into a transcript.
    pub fn from_fragments(video_id: &str, fragments: &[CaptionFragment]) -> Self {
        let text = fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            video_id: video_id.to_string(),
            text,
            fragment_count: fragments.len(),
        }
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Why a transcript could not be retrieved.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptFailure {
    /// The provider reported an error.
    Provider(String),
    /// The provider did not answer in time.
    TimedOut(Duration),
    /// The provider answered with no caption text.
    Empty,
}

impl fmt::Display for TranscriptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptFailure::Provider(msg) => write!(f, "provider error: {}", msg),
            TranscriptFailure::TimedOut(d) => write!(f, "timed out after {}s", d.as_secs()),
            TranscriptFailure::Empty => write!(f, "no caption text returned"),
        }
    }
}

/// No transcript is available for a video.
///
/// Displays a single user-facing message regardless of cause.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", NO_TRANSCRIPT_MESSAGE)]
pub struct TranscriptUnavailable {
    video_id: String,
    cause: TranscriptFailure,
}

impl TranscriptUnavailable {
    pub fn new(video_id: &str, cause: TranscriptFailure) -> Self {
        Self {
            video_id: video_id.to_string(),
            cause,
        }
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    /// The underlying cause, for diagnostics.
    pub fn cause(&self) -> &TranscriptFailure {
        &self.cause
    }
}

/// Trait for caption sources.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch caption fragments for a video, in caption order.
    async fn fetch_fragments(
        &self,
        video_id: &str,
    ) -> std::result::Result<Vec<CaptionFragment>, TranscriptFailure>;
}

/// Default time allowed for a transcript fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches and assembles transcripts.
#[derive(Clone)]
pub struct TranscriptFetcher {
    provider: Arc<dyn TranscriptProvider>,
    timeout: Duration,
}

impl TranscriptFetcher {
    pub fn new(provider: Arc<dyn TranscriptProvider>) -> Self {
        Self {
            provider,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Set the time allowed for a single fetch.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the transcript for a video.
    #[instrument(skip(self))]
    pub async fn fetch(
        &self,
        video_id: &str,
    ) -> std::result::Result<Transcript, TranscriptUnavailable> {
        let fetched = tokio::time::timeout(self.timeout, self.provider.fetch_fragments(video_id))
            .await
            .unwrap_or(Err(TranscriptFailure::TimedOut(self.timeout)));

        let fragments = match fetched {
            Ok(fragments) => fragments,
            Err(cause) => {
                warn!("Transcript unavailable for {}: {}", video_id, cause);
                return Err(TranscriptUnavailable::new(video_id, cause));
            }
        };

        debug!("Received {} caption fragments", fragments.len());

        let transcript = Transcript::from_fragments(video_id, &fragments);
        if transcript.text.trim().is_empty() {
            warn!("Transcript for {} is empty", video_id);
            return Err(TranscriptUnavailable::new(video_id, TranscriptFailure::Empty));
        }

        info!(
            "Fetched transcript for {} ({} fragments, {} words)",
            video_id,
            transcript.fragment_count,
            transcript.word_count()
        );
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedTranscripts;

    #[test]
    fn test_transcript_json() {
        let transcript = Transcript::from_fragments(
            "abc123",
            &[CaptionFragment::text("Test"), CaptionFragment::text("video.")],
        );

        let value: serde_json::Value = serde_json::from_str(&transcript.to_json().unwrap()).unwrap();
        assert_eq!(value["video_id"], "abc123");
        assert_eq!(value["text"], "Test video.");
        assert_eq!(value["fragment_count"], 2);
    }

    #[tokio::test]
    async fn test_fragments_joined_in_order() {
        let fetcher = TranscriptFetcher::new(Arc::new(ScriptedTranscripts::fragments(&[
            "Hello", "world",
        ])));

        let transcript = fetcher.fetch("abc123").await.unwrap();
        assert_eq!(transcript.text, "Hello world");
        assert_eq!(transcript.video_id, "abc123");
        assert_eq!(transcript.fragment_count, 2);
    }

    #[tokio::test]
    async fn test_provider_error_collapsed() {
        let fetcher = TranscriptFetcher::new(Arc::new(ScriptedTranscripts::failing(
            "Subtitles are disabled for this video",
        )));

        let err = fetcher.fetch("abc123").await.unwrap_err();
        assert_eq!(err.to_string(), NO_TRANSCRIPT_MESSAGE);
        assert_eq!(err.video_id(), "abc123");
        assert!(matches!(err.cause(), TranscriptFailure::Provider(_)));
    }

    #[tokio::test]
    async fn test_empty_transcript_unavailable() {
        let fetcher = TranscriptFetcher::new(Arc::new(ScriptedTranscripts::fragments(&[])));
        let err = fetcher.fetch("abc123").await.unwrap_err();
        assert_eq!(err.cause(), &TranscriptFailure::Empty);

        let fetcher = TranscriptFetcher::new(Arc::new(ScriptedTranscripts::fragments(&["", " "])));
        let err = fetcher.fetch("abc123").await.unwrap_err();
        assert_eq!(err.cause(), &TranscriptFailure::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_provider_times_out() {
        let fetcher = TranscriptFetcher::new(Arc::new(
            ScriptedTranscripts::fragments(&["late"]).with_delay(Duration::from_secs(60)),
        ))
        .with_timeout(Duration::from_secs(5));

        let err = fetcher.fetch("abc123").await.unwrap_err();
        assert_eq!(
            err.cause(),
            &TranscriptFailure::TimedOut(Duration::from_secs(5))
        );
        assert_eq!(err.to_string(), NO_TRANSCRIPT_MESSAGE);
    }

    #[test]
    fn test_word_count() {
        let transcript = Transcript::from_fragments(
            "id",
            &[CaptionFragment::text("one two"), CaptionFragment::text("three")],
        );
        assert_eq!(transcript.text, "one two three");
        assert_eq!(transcript.word_count(), 3);
    }
}
