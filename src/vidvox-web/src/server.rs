//! Axum server setup and routing

use crate::routes;
use crate::state::{AppConfig, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router for the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::serve_index))
        .route("/health", get(routes::health))
        .route("/submit_url", post(routes::submit_url))
        // Audio segment
        .route("/play_audio", get(routes::play_audio))
        .route("/download_audio", get(routes::download_audio))
        // First frame
        .route("/first_frame", get(routes::first_frame))
        .route("/download_frame", get(routes::download_frame))
        // Derived text and speech
        .route("/ocr_text", get(routes::ocr_text))
        .route("/translate_audio", get(routes::translate_audio))
        .route("/speak_spanish", get(routes::speak_spanish))
        .route("/debug_audio", get(routes::debug_audio))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Start the web server
pub async fn serve(config: AppConfig, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting Vidvox on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
