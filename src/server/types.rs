use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// The prompt is optional and may be any JSON value.
#[derive(Debug, Default, Deserialize)]
pub struct ImageRequest {
    #[serde(default)]
    pub prompt: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageResponse {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct VisionRequest {
    /// Camera frame as a `data:` URL, when the page sends one.
    #[serde(default)]
    pub image: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VisionResponse {
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceResponse {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Flattens an optional JSON payload field into the text handed to the assistant.
pub fn payload_text(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

/// Lenient body parse for endpoints that ignore their input.
pub fn parse_lenient<T: Default + serde::de::DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}
