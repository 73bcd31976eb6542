//! Text-to-speech via the hosted TTS endpoint
//!
//! The endpoint caps the query length, so longer texts are split at
//! whitespace into chunks and the returned MP3 payloads concatenated.
//! MPEG frames are self-delimiting, so plain concatenation plays back.

use crate::error::{Result, SpeechError};
use tracing::debug;

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Maximum characters sent per TTS request.
const MAX_CHUNK_CHARS: usize = 200;

/// Synthesize `text` as spoken audio in `language`, returning MP3 bytes.
pub async fn synthesize(client: &reqwest::Client, text: &str, language: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SpeechError::Synthesis("no text to synthesize".to_string()));
    }

    let chunks = split_text(text, MAX_CHUNK_CHARS);
    debug!("synthesizing {} chars in {} chunk(s)", text.len(), chunks.len());

    let mut audio = Vec::new();
    for chunk in chunks {
        let response = client
            .get(TTS_ENDPOINT)
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk.as_str()),
                ("tl", language),
                ("client", "tw-ob"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Synthesis(format!("HTTP {}", status)));
        }

        audio.extend_from_slice(&response.bytes().await?);
    }

    if audio.is_empty() {
        return Err(SpeechError::Synthesis("service returned no audio".to_string()));
    }

    Ok(audio)
}

/// Split text into chunks of at most `max_chars`, breaking at whitespace.
/// A single word longer than `max_chars` becomes its own chunk.
fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        assert_eq!(split_text("hola mundo", 200), vec!["hola mundo"]);
    }

    #[test]
    fn test_split_respects_cap() {
        let text = "uno dos tres cuatro cinco seis";
        let chunks = split_text(text, 12);
        assert!(chunks.iter().all(|c| c.len() <= 12));
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn test_long_word_kept_whole() {
        let chunks = split_text("supercalifragilistico", 5);
        assert_eq!(chunks, vec!["supercalifragilistico"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_text("", 200).is_empty());
        assert!(split_text("   ", 200).is_empty());
    }
}
