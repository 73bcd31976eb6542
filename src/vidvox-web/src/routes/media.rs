//! Binary media handlers: frame PNG, segment WAV, spoken translation MP3

use super::{current_url, fetch_audio_segment, fetch_first_frame, transcribe_segment, translate_or_original};
use crate::{ApiError, AppState};
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
};
use bytes::Bytes;

fn media_response(
    bytes: Vec<u8>,
    content_type: &'static str,
    attachment_name: Option<&'static str>,
) -> Response {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, bytes.len());

    if let Some(name) = attachment_name {
        builder = builder.header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", name),
        );
    }

    builder.body(Body::from(Bytes::from(bytes))).unwrap()
}

async fn audio_segment_bytes(state: &AppState) -> Result<Vec<u8>, ApiError> {
    let url = current_url(state).await?;
    let wav = fetch_audio_segment(state, &url).await?;
    Ok(tokio::fs::read(wav.path()).await?)
}

async fn first_frame_bytes(state: &AppState) -> Result<Vec<u8>, ApiError> {
    let url = current_url(state).await?;
    let frame = fetch_first_frame(state, &url).await?;
    Ok(tokio::fs::read(frame.path()).await?)
}

/// GET /play_audio - audio segment for inline playback
pub async fn play_audio(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bytes = audio_segment_bytes(&state).await?;
    Ok(media_response(bytes, "audio/wav", None))
}

/// GET /download_audio - audio segment as attachment
pub async fn download_audio(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bytes = audio_segment_bytes(&state).await?;
    Ok(media_response(bytes, "audio/wav", Some("audio_segment.wav")))
}

/// GET /first_frame - first frame for inline display
pub async fn first_frame(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bytes = first_frame_bytes(&state).await?;
    Ok(media_response(bytes, "image/png", None))
}

/// GET /download_frame - first frame as attachment
pub async fn download_frame(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bytes = first_frame_bytes(&state).await?;
    Ok(media_response(bytes, "image/png", Some("first_frame.png")))
}

/// GET /speak_spanish - synthesize the translated transcript as MP3
pub async fn speak_spanish(State(state): State<AppState>) -> Result<Response, ApiError> {
    let url = current_url(&state).await?;
    let wav = fetch_audio_segment(&state, &url).await?;

    let transcribed = transcribe_segment(&state, &wav).await;
    let translated = translate_or_original(&state, &transcribed).await;

    let audio = vidvox_speech::synthesize(&state.http, &translated, &state.config.target_language)
        .await
        .map_err(|e| ApiError::Failed(format!("Could not generate speech: {}", e)))?;

    Ok(media_response(audio, "audio/mpeg", None))
}
