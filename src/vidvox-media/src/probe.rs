//! Container probe: declared duration and video height

use crate::error::Result;
use crate::ffmpeg_init;
use ffmpeg_next::{self as ffmpeg, codec, media};
use std::path::Path;
use tracing::debug;

/// Declared properties of a downloaded video file.
#[derive(Debug, Clone, Copy)]
pub struct VideoProbe {
    /// Duration in seconds.
    pub duration: f64,
    /// Height of the best video stream in pixels.
    pub height: u32,
}

/// Open the file with ffmpeg and read duration and height.
///
/// Any open or decode failure surfaces as `MediaError::Decode`; nothing
/// here panics on malformed input.
pub fn probe(path: &Path) -> Result<VideoProbe> {
    ffmpeg_init();

    let input = ffmpeg::format::input(&path)?;
    let duration = container_duration(&input);

    let height = match input.streams().best(media::Type::Video) {
        Some(stream) => {
            let decoder = codec::context::Context::from_parameters(stream.parameters())?
                .decoder()
                .video()?;
            decoder.height()
        }
        None => 0,
    };

    debug!("probed {:?}: {:.2}s, {}px", path, duration, height);
    Ok(VideoProbe { duration, height })
}

/// Duration in seconds, preferring the container value and falling back
/// to the longest stream duration.
pub(crate) fn container_duration(input: &ffmpeg::format::context::Input) -> f64 {
    if input.duration() > 0 {
        return input.duration() as f64 / f64::from(ffmpeg::ffi::AV_TIME_BASE);
    }

    input
        .streams()
        .map(|stream| {
            let tb = stream.time_base();
            if stream.duration() > 0 && tb.denominator() > 0 {
                stream.duration() as f64 * f64::from(tb.numerator()) / f64::from(tb.denominator())
            } else {
                0.0
            }
        })
        .fold(0.0, f64::max)
}
