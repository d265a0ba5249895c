mod huggingface;
mod openai;

pub use huggingface::{GenerationParameters, HuggingFaceGenerator};
pub use openai::OpenAiGenerator;

use crate::{
    Result,
    config::{GeneratorConfig, Provider},
    hub,
};
use async_trait::async_trait;
use std::{env, sync::Arc};
use tracing::{error, info, warn};

/// A loaded text-generation pipeline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Runs the model on `prompt` and returns the first candidate's text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Reads the registry credential from the environment variable named in the
/// configuration. Empty values count as absent.
pub fn registry_token(config: &GeneratorConfig) -> Option<String> {
    env::var(&config.token_env)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// Loads the configured generator.
pub async fn load(config: &GeneratorConfig, token: Option<&str>) -> Result<Arc<dyn TextGenerator>> {
    match config.provider {
        Provider::HuggingFace => {
            let generator = HuggingFaceGenerator::load(config, token).await?;
            Ok(Arc::new(generator))
        }
        Provider::OpenAi => Ok(Arc::new(OpenAiGenerator::new(config, token))),
    }
}

/// Startup sequence: authenticate when a credential is present, then load the
/// model. A rejected credential is dropped so public models still load. A load
/// failure is logged and yields `None` so the server can keep answering with a
/// degraded handler.
pub async fn init(config: &GeneratorConfig) -> Option<Arc<dyn TextGenerator>> {
    let token = match registry_token(config) {
        Some(token) => match hub::login(&reqwest::Client::new(), &config.hub_url, &token).await {
            Ok(name) => {
                info!("Authenticated to model registry as {}", name);
                Some(token)
            }
            Err(e) => {
                warn!("Model registry authentication failed, continuing anonymously: {}", e);
                None
            }
        },
        None => {
            info!(
                "{} not set, skipping model registry authentication",
                config.token_env
            );
            None
        }
    };

    match load(config, token.as_deref()).await {
        Ok(generator) => {
            info!("Loaded recipe generator model {}", config.model);
            Some(generator)
        }
        Err(e) => {
            error!("Error loading model {}: {}", config.model, e);
            None
        }
    }
}
