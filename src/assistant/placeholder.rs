use super::Assistant;
use crate::{
    Result,
    config::{AssistantConfig, MESSAGE_PLACEHOLDER},
};
use async_trait::async_trait;
use tracing::debug;

/// Answers every request with canned text or a random placeholder image.
#[derive(Debug, Clone)]
pub struct PlaceholderAssistant {
    config: AssistantConfig,
}

impl PlaceholderAssistant {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }
}

impl Default for PlaceholderAssistant {
    fn default() -> Self {
        Self::new(AssistantConfig::default())
    }
}

#[async_trait]
impl Assistant for PlaceholderAssistant {
    async fn chat(&self, message: &str) -> Result<String> {
        Ok(self
            .config
            .chat_reply_template
            .replace(MESSAGE_PLACEHOLDER, message))
    }

    async fn image(&self, prompt: &str) -> Result<String> {
        debug!("Ignoring image prompt of {} chars", prompt.chars().count());
        let seed: f64 = rand::random();
        Ok(format!("{}{}", self.config.image_base_url, seed))
    }

    async fn vision(&self, image: &str) -> Result<String> {
        debug!("Ignoring camera frame of {} bytes", image.len());
        Ok(self.config.vision_description.clone())
    }

    async fn voice(&self) -> Result<String> {
        Ok(self.config.voice_text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_chat_echoes_message() {
        let assistant = PlaceholderAssistant::default();
        let reply = assistant.chat("open the pod bay doors").await.unwrap();
        assert_eq!(
            reply,
            "You said: open the pod bay doors. (This would be OpenAI real response)"
        );
    }

    #[tokio::test]
    async fn test_chat_replaces_every_placeholder() {
        let assistant = PlaceholderAssistant::new(AssistantConfig {
            chat_reply_template: "{message} / {message}".to_string(),
            ..AssistantConfig::default()
        });
        assert_eq!(assistant.chat("hi").await.unwrap(), "hi / hi");
    }

    #[tokio::test]
    async fn test_image_url_has_random_suffix() {
        let assistant = PlaceholderAssistant::default();
        let url = assistant.image("a red fox").await.unwrap();
        let suffix = url
            .strip_prefix("https://picsum.photos/800?random=")
            .expect("url should use the placeholder base");
        let seed: f64 = suffix.parse().unwrap();
        assert!((0.0..1.0).contains(&seed));
    }

    #[tokio::test]
    async fn test_vision_and_voice_are_fixed() {
        let assistant = PlaceholderAssistant::default();
        assert_eq!(
            assistant.vision("data:image/png;base64,AAAA").await.unwrap(),
            "This would be a vision analysis of the uploaded camera frame."
        );
        assert_eq!(
            assistant.vision("").await.unwrap(),
            "This would be a vision analysis of the uploaded camera frame."
        );
        assert_eq!(
            assistant.voice().await.unwrap(),
            "Realtime voice processing placeholder."
        );
    }
}
