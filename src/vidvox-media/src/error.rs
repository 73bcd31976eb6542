use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("{}", crate::fetch::UNSUPPORTED_HOST_MESSAGE)]
    UnsupportedHost,

    #[error("Video URL requires payment or has expired")]
    PaymentRequired,

    #[error("Video URL access forbidden")]
    AccessForbidden,

    #[error("Video URL not found")]
    NotFound,

    #[error("Video URL returned HTTP status {0}")]
    HttpStatus(u16),

    #[error("URL does not appear to be a video file. Content type: {0}")]
    NotVideo(String),

    #[error("Video file is empty")]
    EmptyFile,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("video has no audio track")]
    NoAudioTrack,

    #[error("audio segment window lies outside the video duration")]
    SegmentOutOfRange,

    #[error("no decodable video frame found")]
    NoVideoFrame,

    #[error("decode error: {0}")]
    Decode(#[from] ffmpeg_next::Error),

    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("WAV write error: {0}")]
    Wav(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MediaError>;
