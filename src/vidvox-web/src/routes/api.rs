//! JSON API handlers

use super::{current_url, fetch_audio_segment, fetch_first_frame, transcribe_segment, translate_or_original};
use crate::store::{SessionState, VideoInfo};
use crate::{ApiError, AppState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use vidvox_media::MediaError;

#[derive(Debug, Deserialize)]
pub struct SubmitUrlRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitUrlResponse {
    pub success: bool,
    pub video_info: VideoInfo,
}

/// POST /submit_url
///
/// Persists the URL together with its probed metadata. Probe failures are
/// stored and reported inside `video_info.error`, not as HTTP errors.
pub async fn submit_url(
    State(state): State<AppState>,
    Json(request): Json<SubmitUrlRequest>,
) -> Result<Json<SubmitUrlResponse>, ApiError> {
    if request.url.is_empty() {
        return Err(ApiError::NoUrlProvided);
    }

    let video_info = probe_url(&state, &request.url).await;

    let session = SessionState {
        current_video_url: request.url,
        video_info: video_info.clone(),
    };
    state
        .store
        .save(&session)
        .await
        .map_err(|e| ApiError::Internal(e.into()))?;

    Ok(Json(SubmitUrlResponse {
        success: true,
        video_info,
    }))
}

/// Download with content-type validation and probe duration/height.
async fn probe_url(state: &AppState, url: &str) -> VideoInfo {
    match try_probe(state, url).await {
        Ok(probe) => VideoInfo {
            duration: probe.duration,
            height: probe.height,
            error: None,
        },
        Err(message) => VideoInfo {
            duration: 0.0,
            height: 0,
            error: Some(message),
        },
    }
}

async fn try_probe(state: &AppState, url: &str) -> Result<vidvox_media::VideoProbe, String> {
    let temp = vidvox_media::download_to_temp(&state.http, url, true)
        .await
        .map_err(|e| e.to_string())?;

    let path = temp.path().to_path_buf();
    tokio::task::spawn_blocking(move || vidvox_media::probe(&path))
        .await
        .map_err(|e| format!("task join error: {}", e))?
        .map_err(|e| match e {
            MediaError::Decode(_) => {
                "Could not open video file - may not be a valid MP4".to_string()
            }
            other => other.to_string(),
        })
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Vidvox video processing service is running",
        "dependencies": {
            "ffmpeg": true,
            "tesseract": state.ocr.available().await,
        },
    }))
}

/// GET /ocr_text - OCR over the first frame
///
/// Engine failures (including a missing tesseract install) surface as the
/// OCR text itself, mirroring the best-effort contract of the other
/// derivation routes.
pub async fn ocr_text(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let url = current_url(&state).await?;
    let frame = fetch_first_frame(&state, &url).await?;

    let text = match state.ocr.recognize(frame.path()).await {
        Ok(text) if text.is_empty() => vidvox_ocr::NO_TEXT_MESSAGE.to_string(),
        Ok(text) => text,
        Err(e) => e.to_string(),
    };

    Ok(Json(json!({ "ocr_text": text })))
}

#[derive(Debug, Serialize)]
pub struct TranslateAudioResponse {
    pub transcribed: String,
    pub translated: String,
}

/// GET /translate_audio - transcribe the segment, then translate it
pub async fn translate_audio(
    State(state): State<AppState>,
) -> Result<Json<TranslateAudioResponse>, ApiError> {
    let url = current_url(&state).await?;
    let wav = fetch_audio_segment(&state, &url).await?;

    let transcribed = transcribe_segment(&state, &wav).await;
    let translated = translate_or_original(&state, &transcribed).await;

    Ok(Json(TranslateAudioResponse {
        transcribed,
        translated,
    }))
}

/// GET /debug_audio - diagnostic view of extraction and transcription
pub async fn debug_audio(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let url = current_url(&state).await?;
    let wav = fetch_audio_segment(&state, &url).await?;

    let file_size = tokio::fs::metadata(wav.path()).await?.len();
    let transcribed = transcribe_segment(&state, &wav).await;

    Ok(Json(json!({
        "audio_file_size": file_size,
        "transcribed_text": transcribed,
        "message": "Audio extraction and transcription completed",
    })))
}
