//! Text translation via the hosted translate endpoint

use crate::error::{Result, SpeechError};
use tracing::debug;

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Translate `text` from `source` into `target` (BCP-47 language codes).
pub async fn translate(
    client: &reqwest::Client,
    text: &str,
    source: &str,
    target: &str,
) -> Result<String> {
    debug!("translating {} chars from {} to {}", text.len(), source, target);

    let response = client
        .get(TRANSLATE_ENDPOINT)
        .query(&[
            ("client", "gtx"),
            ("sl", source),
            ("tl", target),
            ("dt", "t"),
            ("q", text),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SpeechError::Translate(format!("HTTP {}", status)));
    }

    let value: serde_json::Value = response.json().await?;
    parse_translation(&value)
        .ok_or_else(|| SpeechError::Translate("unexpected response shape".to_string()))
}

/// The endpoint answers a nested array: the first element is a list of
/// segments, each segment's first element is the translated text.
fn parse_translation(value: &serde_json::Value) -> Option<String> {
    let segments = value.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|t| t.as_str()) {
            out.push_str(text);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_single_segment() {
        let value = json!([[["hola mundo", "hello world", null, null, 10]], null, "en"]);
        assert_eq!(parse_translation(&value), Some("hola mundo".to_string()));
    }

    #[test]
    fn test_parse_concatenates_segments() {
        let value = json!([
            [
                ["hola mundo. ", "hello world. ", null, null, 10],
                ["adiós.", "goodbye.", null, null, 10]
            ],
            null,
            "en"
        ]);
        assert_eq!(parse_translation(&value), Some("hola mundo. adiós.".to_string()));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(parse_translation(&json!([])), None);
        assert_eq!(parse_translation(&json!(null)), None);
        assert_eq!(parse_translation(&json!([[]])), None);
    }
}
