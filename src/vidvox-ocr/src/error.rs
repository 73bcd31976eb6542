use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("OCR not available on this platform - Tesseract not installed")]
    EngineMissing,

    #[error("OCR engine failed: {0}")]
    EngineFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OcrError>;
