mod placeholder;

pub use placeholder::PlaceholderAssistant;

use crate::Result;
use async_trait::async_trait;

/// Produces the content behind each panel of the page.
#[async_trait]
pub trait Assistant: Send + Sync {
    async fn chat(&self, message: &str) -> Result<String>;

    async fn image(&self, prompt: &str) -> Result<String>;

    async fn vision(&self, image: &str) -> Result<String>;

    /// Transcription itself runs in the browser; this only reports server-side status.
    async fn voice(&self) -> Result<String>;
}
