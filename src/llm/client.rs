use super::types::Completion;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

/// The external generative model. One prompt in, one outcome out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Completion>;
}

/// Talks to any OpenAI-compatible chat completions endpoint (Gemini by default).
pub struct OpenAiCompatClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAiCompatClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            temperature: config.temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatClient {
    async fn complete(&self, prompt: &str) -> Result<Completion> {
        debug!(
            "Creating completion with model {} ({} prompt bytes)",
            self.model,
            prompt.len()
        );

        let message = openai_types::ChatCompletionRequestUserMessageArgs::default()
            .content(openai_types::ChatCompletionRequestUserMessageContent::Text(
                prompt.to_string(),
            ))
            .build()
            .map_err(|e| Error::llm(format!("Failed to build user message: {}", e)))?;
        let messages: Vec<openai_types::ChatCompletionRequestMessage> = vec![message.into()];

        let request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()?;

        let response = self.client.chat().create(request).await?;

        debug!(
            "Received completion response with {} choices",
            response.choices.len()
        );

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        Ok(Completion::from_text(text))
    }
}
