use super::TextGenerator;
use crate::{Error, Result, config::GeneratorConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

/// Text generation through an OpenAI-compatible chat completions endpoint.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl OpenAiGenerator {
    /// Uses `api_key` from the configuration, or the registry token when the
    /// key is blank.
    pub fn new(config: &GeneratorConfig, token: Option<&str>) -> Self {
        let api_key = if config.api_key.is_empty() {
            token.unwrap_or_default().to_string()
        } else {
            config.api_key.clone()
        };

        let mut openai_config = OpenAIConfig::new().with_api_key(api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.clone());
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            max_tokens: config.max_new_tokens,
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let messages: Vec<openai_types::ChatCompletionRequestMessage> = vec![
            openai_types::ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into(),
        ];

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(messages);

        if let Some(temperature) = self.temperature {
            request_builder.temperature(temperature);
        }

        if let Some(max_tokens) = self.max_tokens {
            request_builder.max_completion_tokens(max_tokens);
        }

        let request = request_builder.build()?;

        debug!("Creating chat completion with model {}", self.model);
        let response = self.client.chat().create(request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| Error::generation("model returned no content"))
    }
}
