use crate::error::{OcrError, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Tesseract CLI wrapper
///
/// The engine shells out to the external `tesseract` binary rather than
/// linking against it, so a missing install degrades to a reported error
/// instead of a build failure.
pub struct Engine {
    command: PathBuf,
}

impl Engine {
    /// Create an engine using an explicit binary path.
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self { command: command.into() }
    }

    /// Create an engine from the `TESSERACT_CMD` env var, falling back to
    /// `tesseract` on PATH.
    pub fn from_env() -> Self {
        let command = std::env::var("TESSERACT_CMD").unwrap_or_else(|_| "tesseract".to_string());
        Self::new(command)
    }

    /// Probe whether the binary is runnable.
    pub async fn available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .output()
            .await
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    /// Run OCR over an image file and return the trimmed text.
    ///
    /// An empty string means the engine ran but found no text; callers
    /// decide how to present that.
    pub async fn recognize(&self, image_path: &Path) -> Result<String> {
        debug!("running OCR on {:?}", image_path);

        let output = Command::new(&self.command)
            .arg(image_path)
            .arg("stdout")
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => OcrError::EngineMissing,
                _ => OcrError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::EngineFailed(stderr.trim().to_string()));
        }

        Ok(parse_output(&output.stdout))
    }
}

/// Decode and trim the engine's stdout.
fn parse_output(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_trims() {
        assert_eq!(parse_output(b"  hello world \n\n"), "hello world");
        assert_eq!(parse_output(b"\n"), "");
    }

    #[tokio::test]
    async fn test_missing_binary_reported() {
        let engine = Engine::new("/nonexistent/tesseract-binary");
        assert!(!engine.available().await);
        let err = engine.recognize(Path::new("/tmp/none.png")).await.unwrap_err();
        assert!(matches!(err, OcrError::EngineMissing));
    }
}
