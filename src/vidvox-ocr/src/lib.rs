//! OCR integration for Vidvox
//!
//! Wraps the external Tesseract engine. Text extraction shells out to the
//! `tesseract` binary; availability is probed at runtime so the health
//! endpoint and the `check` command can report a missing install.

mod engine;
mod error;

pub use engine::Engine;
pub use error::{OcrError, Result};

/// Message returned when the engine ran but produced no text.
pub const NO_TEXT_MESSAGE: &str = "No text detected in the image";
