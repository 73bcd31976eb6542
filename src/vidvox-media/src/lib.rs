//! Media fetching and derivation for Vidvox
//!
//! Downloads a video URL to a scoped temp file and derives artifacts from
//! it: container probe (duration/height), first frame as PNG, and a fixed
//! audio segment as PCM WAV. All ffmpeg work is synchronous; callers run
//! it under `spawn_blocking`.

mod audio;
mod error;
mod fetch;
mod frame;
mod probe;

pub use audio::{clamp_segment, extract_segment, SEGMENT_END_SECS, SEGMENT_SAMPLE_RATE, SEGMENT_START_SECS};
pub use error::{MediaError, Result};
pub use fetch::{download_to_temp, is_unsupported_host, UNSUPPORTED_HOST_MESSAGE};
pub use frame::extract_first_frame;
pub use probe::{probe, VideoProbe};

use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initialize ffmpeg exactly once per process.
pub(crate) fn ffmpeg_init() {
    FFMPEG_INIT.call_once(|| {
        ffmpeg_next::init().expect("failed to initialize ffmpeg");
    });
}
