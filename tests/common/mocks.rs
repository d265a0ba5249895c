use async_trait::async_trait;
use pantry_recipes::{Error, Result, generator::TextGenerator};
use std::sync::{Arc, Mutex};

/// Fake text generator recording every prompt it receives
#[derive(Debug, Clone)]
pub struct FakeGenerator {
    pub reply: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl FakeGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new("")
        }
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::generation(error.clone()));
        }

        Ok(self.reply.clone())
    }
}
