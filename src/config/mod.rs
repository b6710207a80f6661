mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config = parse(&config_str)?;
    config.validate()?;

    Ok(config)
}

/// Parses YAML, treating an empty document as all defaults.
pub fn parse(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self
            .assistant
            .chat_reply_template
            .contains(MESSAGE_PLACEHOLDER)
        {
            return Err(Error::config(format!(
                "assistant.chat_reply_template must contain {}",
                MESSAGE_PLACEHOLDER
            )));
        }
        if self.assistant.image_base_url.trim().is_empty() {
            return Err(Error::config("assistant.image_base_url must not be empty"));
        }
        if self.server.max_body_bytes == 0 {
            return Err(Error::config("server.max_body_bytes must be greater than zero"));
        }
        Ok(())
    }
}
