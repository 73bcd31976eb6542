//! Configuration management

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data directory for the session file
    pub data_dir: PathBuf,

    /// Web server port
    pub port: u16,

    /// Audio segment window in seconds
    pub segment_start: f64,
    pub segment_end: f64,

    /// Transcription source language (translate endpoint code)
    pub source_language: String,

    /// Recognizer language tag
    pub recognizer_language: String,

    /// Translation and synthesis target language
    pub target_language: String,

    /// Explicit tesseract binary path
    pub tesseract_cmd: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Vidvox"),
            port: 5000,
            segment_start: 30.0,
            segment_end: 45.0,
            source_language: "en".to_string(),
            recognizer_language: "en-US".to_string(),
            target_language: "es".to_string(),
            tesseract_cmd: None,
        }
    }
}

impl Config {
    /// Load from a TOML file; unspecified fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse config file {:?}", path))
    }

    /// Path of the persisted session JSON file.
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join("video_data.json")
    }

    /// Build the web layer configuration.
    pub fn app_config(&self) -> vidvox_web::AppConfig {
        let mut speech = vidvox_web::SpeechConfig::default();
        speech.language = self.recognizer_language.clone();

        vidvox_web::AppConfig {
            data_file: self.data_file(),
            segment_start: self.segment_start,
            segment_end: self.segment_end,
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
            speech,
            tesseract_cmd: self.tesseract_cmd.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.segment_start, 30.0);
        assert_eq!(config.segment_end, 45.0);
        assert_eq!(config.target_language, "es");
        assert!(config.data_file().ends_with("video_data.json"));
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("port = 8080\ntarget_language = \"fr\"").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.target_language, "fr");
        assert_eq!(config.segment_start, 30.0);
    }
}
