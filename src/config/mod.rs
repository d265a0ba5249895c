mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH`, falling back to
/// `config.yaml` and then to built-in defaults when neither exists.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(config_path) => load_from(&config_path).await,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from(DEFAULT_CONFIG_PATH).await,
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    if config.generator.model.trim().is_empty() {
        return Err(Error::config("generator.model must not be empty"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_reference_deployment() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.generator.provider, Provider::HuggingFace);
        assert_eq!(config.generator.model, "flax-community/t5-recipe-generation");
        assert_eq!(config.generator.token_env, "HF_TOKEN");
        assert_eq!(config.generator.max_new_tokens, None);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
generator:
  provider: openai
  model: gpt-4o-mini
  temperature: 0.2
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.server.port, 5001);
        assert_eq!(config.generator.provider, Provider::OpenAi);
        assert_eq!(config.generator.model, "gpt-4o-mini");
        assert_eq!(config.generator.temperature, Some(0.2));
        assert_eq!(config.generator.hub_url, "https://huggingface.co");
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let yaml = "generator:\n  provider: llamafile\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }
}
