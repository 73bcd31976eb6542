//! Static file serving with embedded files
//!
//! The page is embedded at compile time so the server works from any
//! directory.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the main HTML page
pub async fn serve_index() -> impl IntoResponse {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(INDEX_HTML.to_string())
        .unwrap()
}
