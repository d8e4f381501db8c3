//! Session state machine for one video at a time.
//!
//! A session moves from `Idle` through `Parsing` and `Fetching` to either
//! `Ready` or `Error`. Submitting a new URL always restarts from `Idle`. In
//! `Ready` the summary, Q&A and transcript actions can be used any number of
//! times without changing state.

use crate::config::{Prompts, Settings};
use crate::error::{Result, TldwError};
use crate::llm::{Credential, ModelConfig, ModelResponse, OpenAICompatibleProvider, PromptComposer};
use crate::transcript::{
    Transcript, TranscriptFetcher, TranscriptUnavailable, YoutubeTranscriptProvider,
    NO_TRANSCRIPT_MESSAGE,
};
use crate::video::VideoReference;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Why the session is waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleReason {
    /// No video URL has been given.
    AwaitingUrl,
    /// No API key has been given.
    MissingCredential,
}

impl IdleReason {
    pub fn message(&self) -> &'static str {
        match self {
            IdleReason::AwaitingUrl => "Paste a YouTube video link to get started.",
            IdleReason::MissingCredential => "Please enter your API key to proceed.",
        }
    }
}

/// Terminal failure for the current request.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    InvalidUrl(String),
    NoTranscript(TranscriptUnavailable),
}

impl SessionError {
    /// Message shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::InvalidUrl(_) => "Invalid YouTube URL.",
            SessionError::NoTranscript(_) => NO_TRANSCRIPT_MESSAGE,
        }
    }
}

/// A video with its transcript loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadyState {
    pub video: VideoReference,
    pub transcript: Transcript,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle(IdleReason),
    Parsing { url: String },
    Fetching { video: VideoReference },
    Ready(ReadyState),
    Error(SessionError),
}

/// Inputs that drive the state machine.
#[derive(Debug, Clone)]
pub enum Event {
    /// User submitted input.
    Submitted {
        url: Option<String>,
        has_credential: bool,
    },
    Parsed(VideoReference),
    /// The submitted URL was rejected; carries the reason.
    ParseFailed(String),
    Fetched(Transcript),
    FetchFailed(TranscriptUnavailable),
}

impl SessionState {
    /// Apply an event. Events that do not apply to the current state are ignored.
    pub fn transition(self, event: Event) -> SessionState {
        match (self, event) {
            (_, Event::Submitted { url, has_credential }) => {
                let url = url.filter(|u| !u.trim().is_empty());
                match url {
                    _ if !has_credential => SessionState::Idle(IdleReason::MissingCredential),
                    None => SessionState::Idle(IdleReason::AwaitingUrl),
                    Some(url) => SessionState::Parsing { url },
                }
            }
            (SessionState::Parsing { .. }, Event::Parsed(video)) => {
                SessionState::Fetching { video }
            }
            (SessionState::Parsing { url }, Event::ParseFailed(reason)) => {
                debug!("Rejected {}: {}", url, reason);
                SessionState::Error(SessionError::InvalidUrl(url))
            }
            (SessionState::Fetching { video }, Event::Fetched(transcript))
                if transcript.video_id == video.id() =>
            {
                SessionState::Ready(ReadyState { video, transcript })
            }
            (SessionState::Fetching { .. }, Event::FetchFailed(e)) => {
                SessionState::Error(SessionError::NoTranscript(e))
            }
            (state, _) => state,
        }
    }

    /// True when no further step runs without user input.
    pub fn is_resting(&self) -> bool {
        !matches!(
            self,
            SessionState::Parsing { .. } | SessionState::Fetching { .. }
        )
    }

    /// Apply an event, returning `None` when the state did not move.
    pub fn advance(&self, event: Event) -> Option<SessionState> {
        let next = self.clone().transition(event);
        (next != *self).then_some(next)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle(_) => "idle",
            SessionState::Parsing { .. } => "parsing",
            SessionState::Fetching { .. } => "fetching",
            SessionState::Ready(_) => "ready",
            SessionState::Error(_) => "error",
        }
    }
}

/// One user's interaction: credential, current video and transcript.
pub struct Session {
    fetcher: TranscriptFetcher,
    composer: PromptComposer,
    credential: Option<Credential>,
    state: SessionState,
}

impl Session {
    pub fn new(fetcher: TranscriptFetcher, composer: PromptComposer) -> Self {
        Self {
            fetcher,
            composer,
            credential: None,
            state: SessionState::Idle(IdleReason::MissingCredential),
        }
    }

    /// Build a session backed by YouTube captions and the configured LLM.
    pub fn from_settings(settings: &Settings, model: Option<String>) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let provider = YoutubeTranscriptProvider::with_config(&settings.transcript)?;
        let fetcher = TranscriptFetcher::new(Arc::new(provider))
            .with_timeout(settings.transcript.timeout());

        let model = ModelConfig::new(model.unwrap_or_else(|| settings.llm.model.clone()));
        info!("Using model {} at {}", model.model, settings.llm.api_base);

        let composer = PromptComposer::new(
            Arc::new(OpenAICompatibleProvider::with_config(&settings.llm)),
            model,
        )
        .with_prompts(prompts);

        Ok(Self::new(fetcher, composer))
    }

    pub fn with_credential(mut self, credential: Option<Credential>) -> Self {
        self.set_credential(credential);
        self
    }

    /// Replace the API key. A waiting session re-evaluates why it waits.
    pub fn set_credential(&mut self, credential: Option<Credential>) {
        self.credential = credential;
        if let SessionState::Idle(_) = self.state {
            self.state = SessionState::Idle(if self.credential.is_some() {
                IdleReason::AwaitingUrl
            } else {
                IdleReason::MissingCredential
            });
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn model(&self) -> &ModelConfig {
        self.composer.model()
    }

    /// Submit a video URL and run parsing and fetching to completion.
    pub async fn submit(&mut self, url: Option<&str>) -> &SessionState {
        let mut state = SessionState::Idle(IdleReason::AwaitingUrl).transition(Event::Submitted {
            url: url.map(str::to_string),
            has_credential: self.credential.is_some(),
        });

        while !state.is_resting() {
            debug!("Session state: {}", state.name());
            let event = match &state {
                SessionState::Parsing { url } => match VideoReference::parse(url) {
                    Ok(video) => Event::Parsed(video),
                    Err(e) => {
                        warn!("{}", e);
                        Event::ParseFailed(e.to_string())
                    }
                },
                SessionState::Fetching { video } => match self.fetcher.fetch(video.id()).await {
                    Ok(transcript) => Event::Fetched(transcript),
                    Err(e) => Event::FetchFailed(e),
                },
                _ => break,
            };

            match state.advance(event) {
                Some(next) => state = next,
                None => {
                    warn!("Event ignored while {}; abandoning submission", state.name());
                    state = SessionState::Idle(IdleReason::AwaitingUrl);
                }
            }
        }

        self.state = state;
        &self.state
    }

    /// The loaded video and transcript.
    pub fn ready(&self) -> Result<&ReadyState> {
        match &self.state {
            SessionState::Ready(ready) => Ok(ready),
            _ => Err(TldwError::NotReady),
        }
    }

    /// Raw transcript view.
    pub fn transcript(&self) -> Result<&Transcript> {
        Ok(&self.ready()?.transcript)
    }

    /// Summarize the loaded transcript.
    pub async fn summarize(&self) -> Result<ModelResponse> {
        let ready = self.ready()?;
        let credential = self.credential()?;
        self.composer.summarize(&ready.transcript, credential).await
    }

    /// Answer a question from the loaded transcript.
    pub async fn answer(&self, question: &str) -> Result<ModelResponse> {
        let ready = self.ready()?;
        let credential = self.credential()?;
        self.composer
            .answer(&ready.transcript, question, credential)
            .await
    }

    fn credential(&self) -> Result<&Credential> {
        self.credential.as_ref().ok_or(TldwError::MissingCredential)
    }
}
