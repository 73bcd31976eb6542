//! Video download to a scoped temp file
//!
//! Streams the URL body in chunks with a browser-like User-Agent and a
//! fixed timeout. The returned `NamedTempFile` deletes itself on drop, so
//! every exit path in the callers cleans up automatically.

use crate::error::{MediaError, Result};
use futures::StreamExt;
use reqwest::header;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Sent with every download request; some hosts reject non-browser agents.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Whole-request timeout for a single download.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Hosts that serve player pages, not direct media files.
const UNSUPPORTED_HOSTS: &[&str] = &["youtube.com", "youtu.be", "www.youtube.com", "m.youtube.com"];

/// Fixed message returned for video-sharing-site URLs.
pub const UNSUPPORTED_HOST_MESSAGE: &str = "YouTube URLs are not supported. Please use direct MP4 video URLs or upload your video to a file sharing service.";

/// Check whether the URL points at a known video-sharing site.
pub fn is_unsupported_host(url: &str) -> bool {
    let lower = url.to_lowercase();
    UNSUPPORTED_HOSTS.iter().any(|host| lower.contains(host))
}

/// True when the declared content type plausibly describes a video file.
fn looks_like_video(content_type: &str) -> bool {
    let lower = content_type.to_lowercase();
    lower.contains("video") || lower.contains("mp4")
}

/// Map a non-2xx download status onto a user-facing error.
fn status_error(status: reqwest::StatusCode) -> MediaError {
    match status.as_u16() {
        402 => MediaError::PaymentRequired,
        403 => MediaError::AccessForbidden,
        404 => MediaError::NotFound,
        code => MediaError::HttpStatus(code),
    }
}

/// Download `url` to a named temp file with an `.mp4` suffix.
///
/// When `require_video_content` is set, responses whose Content-Type names
/// neither `video` nor `mp4` are rejected before any bytes are read. A
/// zero-length download is an error; the temp file is removed on drop.
pub async fn download_to_temp(
    client: &reqwest::Client,
    url: &str,
    require_video_content: bool,
) -> Result<NamedTempFile> {
    if is_unsupported_host(url) {
        return Err(MediaError::UnsupportedHost);
    }

    debug!("downloading {}", url);
    let response = client
        .get(url)
        .header(header::USER_AGENT, BROWSER_USER_AGENT)
        .timeout(DOWNLOAD_TIMEOUT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        warn!("download of {} failed with status {}", url, status);
        return Err(status_error(status));
    }

    if require_video_content {
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !looks_like_video(&content_type) {
            return Err(MediaError::NotVideo(content_type));
        }
    }

    let temp = tempfile::Builder::new()
        .prefix("vidvox")
        .suffix(".mp4")
        .tempfile()?;

    let mut file = tokio::fs::File::create(temp.path()).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
    }
    file.flush().await?;
    drop(file);

    if downloaded == 0 {
        return Err(MediaError::EmptyFile);
    }

    debug!("downloaded {} bytes to {:?}", downloaded, temp.path());
    Ok(temp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_hosts() {
        assert!(is_unsupported_host("https://www.youtube.com/watch?v=abc"));
        assert!(is_unsupported_host("https://youtu.be/abc"));
        assert!(is_unsupported_host("https://m.youtube.com/watch?v=abc"));
        assert!(is_unsupported_host("HTTPS://YOUTUBE.COM/WATCH?V=ABC"));
        assert!(!is_unsupported_host("https://example.com/video.mp4"));
    }

    #[test]
    fn test_content_type_check() {
        assert!(looks_like_video("video/mp4"));
        assert!(looks_like_video("application/mp4"));
        assert!(looks_like_video("VIDEO/QUICKTIME"));
        assert!(!looks_like_video("text/html; charset=utf-8"));
        assert!(!looks_like_video(""));
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(reqwest::StatusCode::PAYMENT_REQUIRED),
            MediaError::PaymentRequired
        ));
        assert!(matches!(
            status_error(reqwest::StatusCode::FORBIDDEN),
            MediaError::AccessForbidden
        ));
        assert!(matches!(
            status_error(reqwest::StatusCode::NOT_FOUND),
            MediaError::NotFound
        ));
        assert!(matches!(
            status_error(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            MediaError::HttpStatus(500)
        ));
    }
}
