#![allow(dead_code)]

use async_trait::async_trait;
use edith_rust::{Error, Result, assistant::Assistant};
use std::sync::{Arc, Mutex};

/// Mock assistant that records its inputs and returns fixed outputs
#[derive(Debug, Default)]
pub struct MockAssistant {
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub error: Option<String>,
}

impl MockAssistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &str, input: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), input.to_string()));
        match &self.error {
            Some(error) => Err(Error::assistant(error.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Assistant for MockAssistant {
    async fn chat(&self, message: &str) -> Result<String> {
        self.record("chat", message)?;
        Ok(format!("mock reply to {}", message))
    }

    async fn image(&self, prompt: &str) -> Result<String> {
        self.record("image", prompt)?;
        Ok("https://example.com/mock.png".to_string())
    }

    async fn vision(&self, image: &str) -> Result<String> {
        self.record("vision", image)?;
        Ok("mock description".to_string())
    }

    async fn voice(&self) -> Result<String> {
        self.record("voice", "")?;
        Ok("mock voice".to_string())
    }
}
