//! Prompt composition for summaries and answers.

use super::{CompletionProvider, Credential, ModelConfig, ModelResponse, PromptRequest, TEMPERATURE};
use crate::config::Prompts;
use crate::error::{Result, TldwError};
use crate::transcript::Transcript;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

/// Fills prompt templates and runs them through a completion provider.
#[derive(Clone)]
pub struct PromptComposer {
    provider: Arc<dyn CompletionProvider>,
    model: ModelConfig,
    prompts: Prompts,
}

impl PromptComposer {
    /// Create a composer with the default prompts.
    pub fn new(provider: Arc<dyn CompletionProvider>, model: ModelConfig) -> Self {
        Self {
            provider,
            model,
            prompts: Prompts::default(),
        }
    }

    /// Set custom prompts (with user-defined variables).
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    /// Build the summary request for a transcript.
    pub fn summary_request(&self, transcript: &Transcript) -> PromptRequest {
        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), transcript.text.clone());

        self.request(self.prompts.render_with_custom(&self.prompts.summary.template, &vars))
    }

    /// Build the answer request for a question about a transcript.
    pub fn answer_request(&self, transcript: &Transcript, question: &str) -> PromptRequest {
        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), transcript.text.clone());
        vars.insert("question".to_string(), question.to_string());

        self.request(self.prompts.render_with_custom(&self.prompts.answer.template, &vars))
    }

    /// Summarize a transcript.
    #[instrument(skip_all, fields(video_id = %transcript.video_id))]
    pub async fn summarize(
        &self,
        transcript: &Transcript,
        credential: &Credential,
    ) -> Result<ModelResponse> {
        info!("Generating summary with {}", self.model.model);
        let request = self.summary_request(transcript);
        self.provider.complete(&request, credential).await
    }

    /// Answer a question using only the transcript.
    #[instrument(skip_all, fields(video_id = %transcript.video_id))]
    pub async fn answer(
        &self,
        transcript: &Transcript,
        question: &str,
        credential: &Credential,
    ) -> Result<ModelResponse> {
        let question = question.trim();
        if question.is_empty() {
            return Err(TldwError::InvalidInput("question is empty".to_string()));
        }

        info!("Answering question with {}", self.model.model);
        let request = self.answer_request(transcript, question);
        self.provider.complete(&request, credential).await
    }

    fn request(&self, prompt: String) -> PromptRequest {
        PromptRequest {
            model: self.model.model.clone(),
            temperature: TEMPERATURE,
            prompt,
        }
    }
}
