//! Session persistence: one JSON document on disk
//!
//! The store holds the last submitted URL and its probed metadata. Writes
//! are whole-file replacements with last-write-wins semantics; there is
//! deliberately no locking. A missing or unreadable file reads as the
//! empty default.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Probed properties of the current video, or the reason probing failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoInfo {
    pub duration: f64,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The single persisted entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    #[serde(default)]
    pub current_video_url: String,
    #[serde(default)]
    pub video_info: VideoInfo,
}

/// File-backed session store.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the persisted session, defaulting when absent or corrupt.
    pub async fn load(&self) -> SessionState {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(state) => state,
                Err(e) => {
                    warn!("session file {:?} unreadable, starting fresh: {}", self.path, e);
                    SessionState::default()
                }
            },
            Err(_) => SessionState::default(),
        }
    }

    /// Replace the persisted session. Last write wins.
    pub async fn save(&self, state: &SessionState) -> std::io::Result<()> {
        let bytes = serde_json::to_vec(state)?;
        tokio::fs::write(&self.path, bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("video_data.json"));
        let state = store.load().await;
        assert_eq!(state, SessionState::default());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("video_data.json"));

        let state = SessionState {
            current_video_url: "https://example.com/video.mp4".to_string(),
            video_info: VideoInfo {
                duration: 12.5,
                height: 720,
                error: None,
            },
        };
        store.save(&state).await.unwrap();
        assert_eq!(store.load().await, state);
    }

    #[tokio::test]
    async fn test_overwrite_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("video_data.json"));

        for url in ["first", "second"] {
            let state = SessionState {
                current_video_url: url.to_string(),
                video_info: VideoInfo::default(),
            };
            store.save(&state).await.unwrap();
        }
        assert_eq!(store.load().await.current_video_url, "second");
    }

    #[tokio::test]
    async fn test_corrupt_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video_data.json");
        tokio::fs::write(&path, b"not json").await.unwrap();
        let store = SessionStore::new(path);
        assert_eq!(store.load().await, SessionState::default());
    }
}
