use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the registry credential.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_hub_url")]
    pub hub_url: String,
    #[serde(default = "default_inference_url")]
    pub inference_url: String,
    // OpenAI-compatible provider only
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub max_new_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[default]
    #[serde(rename = "huggingface")]
    HuggingFace,
    #[serde(rename = "openai")]
    OpenAi,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            model: default_model(),
            token_env: default_token_env(),
            hub_url: default_hub_url(),
            inference_url: default_inference_url(),
            base_url: String::new(),
            api_key: String::new(),
            max_new_tokens: None,
            temperature: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_model() -> String {
    "flax-community/t5-recipe-generation".to_string()
}

fn default_token_env() -> String {
    "HF_TOKEN".to_string()
}

fn default_hub_url() -> String {
    "https://huggingface.co".to_string()
}

fn default_inference_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}
