//! Test doubles for the external services.

use crate::error::{Result, TldwError};
use crate::llm::{CompletionProvider, Credential, ModelResponse, PromptRequest, NOT_FOUND_PHRASE};
use crate::transcript::{CaptionFragment, TranscriptFailure, TranscriptProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Transcript provider returning a fixed result.
pub struct ScriptedTranscripts {
    result: std::result::Result<Vec<CaptionFragment>, TranscriptFailure>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedTranscripts {
    pub fn fragments(texts: &[&str]) -> Self {
        Self {
            result: Ok(texts.iter().map(|t| CaptionFragment::text(*t)).collect()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(TranscriptFailure::Provider(message.to_string())),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptProvider for ScriptedTranscripts {
    async fn fetch_fragments(
        &self,
        _video_id: &str,
    ) -> std::result::Result<Vec<CaptionFragment>, TranscriptFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}

enum Reply {
    Fixed(String),
    /// Answer only when the text appears in the prompt's transcript.
    Grounded(String),
    Fail,
}

/// Completion provider returning canned text and recording requests.
pub struct CannedCompletion {
    reply: Reply,
    requests: Mutex<Vec<PromptRequest>>,
}

impl CannedCompletion {
    pub fn new(text: &str) -> Self {
        Self::with_reply(Reply::Fixed(text.to_string()))
    }

    pub fn grounded(answer: &str) -> Self {
        Self::with_reply(Reply::Grounded(answer.to_string()))
    }

    pub fn failing() -> Self {
        Self::with_reply(Reply::Fail)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for CannedCompletion {
    async fn complete(
        &self,
        request: &PromptRequest,
        _credential: &Credential,
    ) -> Result<ModelResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let text = match &self.reply {
            Reply::Fixed(text) => text.clone(),
            Reply::Grounded(answer) => {
                let transcript = request
                    .prompt
                    .split("Transcript:")
                    .nth(1)
                    .and_then(|rest| rest.split("Question:").next())
                    .unwrap_or_default();
                if transcript.contains(answer.as_str()) {
                    answer.clone()
                } else {
                    NOT_FOUND_PHRASE.to_string()
                }
            }
            Reply::Fail => {
                return Err(TldwError::Service("503 Service Unavailable".to_string()));
            }
        };

        Ok(ModelResponse { text })
    }
}
