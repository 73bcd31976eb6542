//! Vidvox web layer - HTTP routes over the media/OCR/speech crates

pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use error::ApiError;
pub use server::{router, serve};
pub use state::{AppConfig, AppState};
pub use store::{SessionState, SessionStore, VideoInfo};

pub use vidvox_speech::SpeechConfig;
