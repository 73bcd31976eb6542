use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("No audio content found")]
    EmptyAudio,

    #[error("No speech detected in the audio")]
    NoSpeech,

    #[error("Speech recognition service error: {0}")]
    Service(String),

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("translation failed: {0}")]
    Translate(String),

    #[error("speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("audio read error: {0}")]
    Wav(#[from] hound::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SpeechError>;
