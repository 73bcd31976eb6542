//! Hosted speech services for Vidvox
//!
//! Thin wrappers over three hosted web APIs: speech recognition,
//! text translation, and text-to-speech. Each call maps its failure modes
//! onto a `SpeechError`; nothing here retries beyond the multi-attempt
//! transcription heuristic in [`recognize`].

mod error;
pub mod recognize;
pub mod translate;
pub mod tts;

pub use error::{Result, SpeechError};
pub use recognize::{transcribe, SpeechConfig};
pub use translate::translate;
pub use tts::synthesize;
