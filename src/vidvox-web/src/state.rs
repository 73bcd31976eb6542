//! Shared application state

use crate::store::SessionStore;
use std::path::PathBuf;
use std::sync::Arc;
use vidvox_speech::SpeechConfig;

/// Runtime configuration for the web layer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the persisted session JSON file.
    pub data_file: PathBuf,

    /// Audio segment window, seconds into the video.
    pub segment_start: f64,
    pub segment_end: f64,

    /// Transcription source language.
    pub source_language: String,

    /// Translation / synthesis target language.
    pub target_language: String,

    /// Recognizer endpoint settings.
    pub speech: SpeechConfig,

    /// Explicit tesseract binary path; `None` falls back to the
    /// `TESSERACT_CMD` env var, then PATH.
    pub tesseract_cmd: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("video_data.json"),
            segment_start: vidvox_media::SEGMENT_START_SECS,
            segment_end: vidvox_media::SEGMENT_END_SECS,
            source_language: "en".to_string(),
            target_language: "es".to_string(),
            speech: SpeechConfig::default(),
            tesseract_cmd: None,
        }
    }
}

/// Shared state across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Session store (one JSON file, last write wins)
    pub store: Arc<SessionStore>,

    /// HTTP client reused for downloads and hosted API calls
    pub http: reqwest::Client,

    /// OCR engine wrapper
    pub ocr: Arc<vidvox_ocr::Engine>,

    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Self {
        let ocr = match &config.tesseract_cmd {
            Some(cmd) => vidvox_ocr::Engine::new(cmd.clone()),
            None => vidvox_ocr::Engine::from_env(),
        };

        Self {
            store: Arc::new(SessionStore::new(config.data_file.clone())),
            http: reqwest::Client::new(),
            ocr: Arc::new(ocr),
            config: Arc::new(config),
        }
    }
}
