use super::types::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, ImageRequest, ImageResponse,
    VisionRequest, VisionResponse, VoiceResponse, parse_lenient, payload_text,
};
use crate::assistant::Assistant;
use axum::{
    body::Bytes,
    extract::{
        State,
        rejection::{BytesRejection, JsonRejection},
    },
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<dyn Assistant>,
    pub page: Arc<str>,
}

impl AppState {
    pub fn new(assistant: Arc<dyn Assistant>, title: &str) -> Self {
        Self {
            assistant,
            page: super::page::render(title).into(),
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn internal_error(endpoint: &str, e: crate::Error) -> HandlerError {
    error!("Failed to process {} request: {}", endpoint, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Processing error: {}", e),
        }),
    )
}

/// Turns an extractor rejection into the JSON error body every endpoint uses.
fn rejected(endpoint: &str, status: StatusCode, reason: String) -> HandlerError {
    warn!("Rejected {} request ({}): {}", endpoint, status, reason);
    (status, Json(ErrorResponse { error: reason }))
}

fn read_body(endpoint: &str, body: Result<Bytes, BytesRejection>) -> Result<Bytes, HandlerError> {
    body.map_err(|rejection| rejected(endpoint, rejection.status(), rejection.body_text()))
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, HandlerError> {
    let Json(request) = payload
        .map_err(|rejection| rejected("chat", rejection.status(), rejection.body_text()))?;

    info!(
        "Received chat request with {} chars",
        request.message.chars().count()
    );

    let reply = state
        .assistant
        .chat(&request.message)
        .await
        .map_err(|e| internal_error("chat", e))?;

    Ok(Json(ChatResponse { reply }))
}

/// The prompt is optional; any body is accepted.
pub async fn image(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ImageResponse>, HandlerError> {
    let body = read_body("image", body)?;
    let prompt = payload_text(parse_lenient::<ImageRequest>(&body).prompt);

    info!(
        "Received image request with {} char prompt",
        prompt.chars().count()
    );

    let url = state
        .assistant
        .image(&prompt)
        .await
        .map_err(|e| internal_error("image", e))?;

    Ok(Json(ImageResponse { url }))
}

/// The frame is optional; any body within the size limit is accepted.
pub async fn vision(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<VisionResponse>, HandlerError> {
    let body = read_body("vision", body)?;
    let image = payload_text(parse_lenient::<VisionRequest>(&body).image);

    info!("Received vision request with {} byte frame", image.len());

    let description = state
        .assistant
        .vision(&image)
        .await
        .map_err(|e| internal_error("vision", e))?;

    Ok(Json(VisionResponse { description }))
}

/// Any body, including none, is accepted.
pub async fn voice(State(state): State<AppState>) -> Result<Json<VoiceResponse>, HandlerError> {
    info!("Received voice request");

    let text = state
        .assistant
        .voice()
        .await
        .map_err(|e| internal_error("voice", e))?;

    Ok(Json(VoiceResponse { text }))
}
