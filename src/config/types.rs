use serde::{Deserialize, Serialize};

pub const MESSAGE_PLACEHOLDER: &str = "{message}";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    /// Upper bound for request bodies. Camera frames arrive as base64 data URLs.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default = "default_cors")]
    pub cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Canned responses served by the placeholder assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Must contain `{message}`, which is replaced by the user's message.
    #[serde(default = "default_chat_reply_template")]
    pub chat_reply_template: String,
    /// A random number in `[0, 1)` is appended to this to build each image URL.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_vision_description")]
    pub vision_description: String,
    #[serde(default = "default_voice_text")]
    pub voice_text: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            max_body_bytes: default_max_body_bytes(),
            cors: default_cors(),
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

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            chat_reply_template: default_chat_reply_template(),
            image_base_url: default_image_base_url(),
            vision_description: default_vision_description(),
            voice_text: default_voice_text(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_cors() -> bool {
    true
}

fn default_name() -> String {
    "Edith AI".to_string()
}

fn default_chat_reply_template() -> String {
    "You said: {message}. (This would be OpenAI real response)".to_string()
}

fn default_image_base_url() -> String {
    "https://picsum.photos/800?random=".to_string()
}

fn default_vision_description() -> String {
    "This would be a vision analysis of the uploaded camera frame.".to_string()
}

fn default_voice_text() -> String {
    "Realtime voice processing placeholder.".to_string()
}
