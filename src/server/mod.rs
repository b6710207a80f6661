pub mod handlers;
pub mod page;
pub mod types;

use crate::{assistant::PlaceholderAssistant, config::Config, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info, warn};

pub use handlers::AppState;

pub fn router(state: AppState, max_body_bytes: usize, cors: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/chat", post(handlers::chat))
        .route("/api/image", post(handlers::image))
        .route("/api/vision", post(handlers::vision))
        .route("/api/voice", post(handlers::voice))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state);

    if cors {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

pub async fn run(config: Config) -> Result<()> {
    let assistant = PlaceholderAssistant::new(config.assistant.clone());
    let app_state = AppState::new(Arc::new(assistant), &config.assistant.name);

    let app = router(
        app_state,
        config.server.max_body_bytes,
        config.server.cors,
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
