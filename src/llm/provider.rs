//! Chat completions against an OpenAI-compatible endpoint (Groq by default).

use super::{CompletionProvider, Credential, ModelResponse, PromptRequest};
use crate::config::LlmSettings;
use crate::error::{Result, TldwError};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Completion provider speaking the OpenAI chat completions API.
pub struct OpenAICompatibleProvider {
    api_base: String,
    timeout: Duration,
}

impl OpenAICompatibleProvider {
    pub fn new(api_base: &str, timeout: Duration) -> Self {
        Self {
            api_base: api_base.to_string(),
            timeout,
        }
    }

    pub fn with_config(settings: &LlmSettings) -> Self {
        Self::new(&settings.api_base, settings.timeout())
    }
}

#[async_trait]
impl CompletionProvider for OpenAICompatibleProvider {
    #[instrument(skip(self, request, credential), fields(model = %request.model))]
    async fn complete(
        &self,
        request: &PromptRequest,
        credential: &Credential,
    ) -> Result<ModelResponse> {
        let client = create_client(&self.api_base, credential, self.timeout)?;

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(request.prompt.clone())
                .build()
                .map_err(|e| TldwError::Service(e.to_string()))?
                .into(),
        ];

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&request.model)
            .messages(messages)
            .temperature(request.temperature)
            .build()
            .map_err(|e| TldwError::Service(e.to_string()))?;

        debug!("Sending {} prompt characters", request.prompt.len());

        let response = client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| TldwError::Service(format!("Failed to generate response: {}", e)))?;

        let text = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| TldwError::Service("Empty response from LLM".to_string()))?
            .clone();

        Ok(ModelResponse { text })
    }
}
