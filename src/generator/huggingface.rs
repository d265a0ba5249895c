use super::TextGenerator;
use crate::{Error, Result, config::GeneratorConfig, hub};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Optional sampling parameters forwarded to the inference API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerationParameters {
    fn is_empty(&self) -> bool {
        self.max_new_tokens.is_none() && self.temperature.is_none()
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "GenerationParameters::is_empty")]
    parameters: &'a GenerationParameters,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Candidates(Vec<GeneratedText>),
    Failure { error: String },
}

/// Text generation through the Hugging Face Inference API.
pub struct HuggingFaceGenerator {
    client: Client,
    endpoint: String,
    token: Option<String>,
    parameters: GenerationParameters,
}

impl HuggingFaceGenerator {
    pub fn new(config: &GeneratorConfig, token: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!(
                "{}/models/{}",
                config.inference_url.trim_end_matches('/'),
                config.model
            ),
            token: token.map(str::to_string),
            parameters: GenerationParameters {
                max_new_tokens: config.max_new_tokens,
                temperature: config.temperature,
            },
        }
    }

    /// Confirms the model exists on the registry before building the client.
    pub async fn load(config: &GeneratorConfig, token: Option<&str>) -> Result<Self> {
        let generator = Self::new(config, token);

        let info = hub::model_info(&config.hub_url, &config.model, token)
            .await
            .map_err(|e| Error::model_load(format!("{}: {}", config.model, e)))?;
        debug!(
            "Model {} resolved at revision {} with {} files",
            config.model,
            info.sha,
            info.siblings.len()
        );

        Ok(generator)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = InferenceRequest {
            inputs: prompt,
            parameters: &self.parameters,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        debug!("Sending inference request to {}", self.endpoint);
        let response = hub::with_token(self.client.post(&self.endpoint), self.token.as_deref())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::generation(format!("{status}: {body}")));
        }

        match response.json::<InferenceResponse>().await? {
            InferenceResponse::Candidates(candidates) => candidates
                .into_iter()
                .next()
                .map(|candidate| candidate.generated_text)
                .ok_or_else(|| Error::generation("model returned no candidates")),
            InferenceResponse::Failure { error } => Err(Error::generation(error)),
        }
    }
}
