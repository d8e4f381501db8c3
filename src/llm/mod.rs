//! LLM completion for summaries and transcript Q&A.
//!
//! The [`PromptComposer`] fills the summary/answer templates and hands a
//! [`PromptRequest`] to a [`CompletionProvider`]. Model settings and the API
//! key are passed in explicitly on every call.

mod composer;
mod provider;

pub use composer::PromptComposer;
pub use provider::OpenAICompatibleProvider;

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Sampling temperature for every request. Answers should be reproducible.
pub const TEMPERATURE: f32 = 0.0;

/// Reply the model is told to give when the transcript lacks an answer.
pub const NOT_FOUND_PHRASE: &str = "I couldn't find that in the video.";

/// An API key for the completion provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a key, treating blank input as no key.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// The raw key, for request headers only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Model selection shared by all requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub model: String,
}

impl ModelConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

/// A single rendered prompt ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub model: String,
    pub temperature: f32,
    pub prompt: String,
}

/// Text generated by the model, shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    pub text: String,
}

impl fmt::Display for ModelResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Trait for LLM completion backends.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion.
    async fn complete(&self, request: &PromptRequest, credential: &Credential)
        -> Result<ModelResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_blank_is_none() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
        assert_eq!(Credential::new(" gsk_abc ").unwrap().expose(), "gsk_abc");
    }

    #[test]
    fn test_credential_debug_redacted() {
        let credential = Credential::new("gsk_secret").unwrap();
        assert!(!format!("{:?}", credential).contains("gsk_secret"));
    }
}
