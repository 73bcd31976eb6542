//! HTTP route handlers

pub mod api;
pub mod media;
pub mod static_files;

pub use api::*;
pub use media::*;
pub use static_files::*;

use crate::{ApiError, AppState};
use tempfile::NamedTempFile;
use tracing::warn;

/// Load the submitted URL, rejecting requests made before any submission.
pub(crate) async fn current_url(state: &AppState) -> Result<String, ApiError> {
    let session = state.store.load().await;
    if session.current_video_url.is_empty() {
        return Err(ApiError::NoVideoUrl);
    }
    Ok(session.current_video_url)
}

/// Download the video and extract the audio segment WAV.
///
/// The intermediate video temp file is dropped (deleted) before this
/// returns; only the WAV guard survives.
pub(crate) async fn fetch_audio_segment(
    state: &AppState,
    url: &str,
) -> Result<NamedTempFile, ApiError> {
    let video = vidvox_media::download_to_temp(&state.http, url, false)
        .await
        .map_err(|e| ApiError::Failed(format!("Could not extract audio: {}", e)))?;

    let path = video.path().to_path_buf();
    let (start, end) = (state.config.segment_start, state.config.segment_end);
    let wav = tokio::task::spawn_blocking(move || vidvox_media::extract_segment(&path, start, end))
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("task join error: {}", e)))?
        .map_err(|e| ApiError::Failed(format!("Could not extract audio: {}", e)))?;

    Ok(wav)
}

/// Download the video and extract the first frame PNG.
pub(crate) async fn fetch_first_frame(
    state: &AppState,
    url: &str,
) -> Result<NamedTempFile, ApiError> {
    let video = vidvox_media::download_to_temp(&state.http, url, false)
        .await
        .map_err(|e| ApiError::Failed(format!("Could not extract first frame: {}", e)))?;

    let path = video.path().to_path_buf();
    let frame = tokio::task::spawn_blocking(move || vidvox_media::extract_first_frame(&path))
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("task join error: {}", e)))?
        .map_err(|e| ApiError::Failed(format!("Could not extract first frame: {}", e)))?;

    Ok(frame)
}

/// Transcribe the WAV; recognition failures become user-facing text
/// rather than errors, matching the best-effort contract.
pub(crate) async fn transcribe_segment(state: &AppState, wav: &NamedTempFile) -> String {
    match vidvox_speech::transcribe(&state.http, &state.config.speech, wav.path()).await {
        Ok(text) => text,
        Err(e) => e.to_string(),
    }
}

/// Translate, falling back to the untranslated text on any failure.
pub(crate) async fn translate_or_original(state: &AppState, text: &str) -> String {
    match vidvox_speech::translate(
        &state.http,
        text,
        &state.config.source_language,
        &state.config.target_language,
    )
    .await
    {
        Ok(translated) => translated,
        Err(e) => {
            warn!("translation failed, returning original text: {}", e);
            text.to_string()
        }
    }
}
