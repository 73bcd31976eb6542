//! Audio segment extraction to PCM WAV
//!
//! Decodes the audio stream over a fixed window, resamples to 16 kHz mono
//! s16, and writes a WAV file suitable both for playback and for the
//! hosted speech recognizer.

use crate::error::{MediaError, Result};
use crate::ffmpeg_init;
use crate::probe::container_duration;
use ffmpeg_next::{self as ffmpeg, channel_layout::ChannelLayout, codec, format, media, software};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Segment window start, seconds into the video.
pub const SEGMENT_START_SECS: f64 = 30.0;

/// Segment window end, seconds into the video.
pub const SEGMENT_END_SECS: f64 = 45.0;

/// Output sample rate for the extracted WAV.
pub const SEGMENT_SAMPLE_RATE: u32 = 16_000;

/// Clamp the segment window to the video duration.
///
/// Returns `None` when the window starts at or beyond the end of the
/// video, or collapses to nothing after clamping.
pub fn clamp_segment(start: f64, end: f64, duration: f64) -> Option<(f64, f64)> {
    if start >= duration {
        return None;
    }
    let end = end.min(duration);
    if end <= start {
        return None;
    }
    Some((start, end))
}

/// Extract `[start, end)` of the audio track as a 16 kHz mono WAV.
pub fn extract_segment(video_path: &Path, start: f64, end: f64) -> Result<NamedTempFile> {
    ffmpeg_init();

    let mut input = ffmpeg::format::input(&video_path)?;
    let duration = container_duration(&input);

    let (start, end) = clamp_segment(start, end, duration).ok_or(MediaError::SegmentOutOfRange)?;

    let stream = input
        .streams()
        .best(media::Type::Audio)
        .ok_or(MediaError::NoAudioTrack)?;
    let stream_index = stream.index();
    let time_base = stream.time_base();

    let mut decoder = codec::context::Context::from_parameters(stream.parameters())?
        .decoder()
        .audio()?;

    // Decoded streams occasionally carry no layout; derive one from the
    // channel count so the resampler has a valid input description.
    let in_layout = if decoder.channel_layout().bits() == 0 {
        ChannelLayout::default(decoder.channels() as i32)
    } else {
        decoder.channel_layout()
    };

    let mut resampler = software::resampling::context::Context::get(
        decoder.format(),
        in_layout,
        decoder.rate(),
        format::Sample::I16(format::sample::Type::Packed),
        ChannelLayout::MONO,
        SEGMENT_SAMPLE_RATE,
    )?;

    info!(
        "extracting audio from {:.1}s to {:.1}s (duration: {:.1}s)",
        start,
        end,
        end - start
    );

    let temp = tempfile::Builder::new()
        .prefix("vidvox")
        .suffix(".wav")
        .tempfile()?;
    let spec = WavSpec {
        channels: 1,
        sample_rate: SEGMENT_SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(temp.path(), spec)?;

    // Seek near the window start; the pts gate below drops the lead-in
    // frames the demuxer hands back from the preceding keyframe.
    let seek_ts = (start * f64::from(ffmpeg::ffi::AV_TIME_BASE)) as i64;
    input.seek(seek_ts, ..seek_ts)?;

    let ts_to_secs =
        |ts: i64| ts as f64 * f64::from(time_base.numerator()) / f64::from(time_base.denominator());

    let mut decoded = ffmpeg::util::frame::audio::Audio::empty();
    'packets: for (packet_stream, packet) in input.packets() {
        if packet_stream.index() != stream_index {
            continue;
        }
        decoder.send_packet(&packet)?;
        while decoder.receive_frame(&mut decoded).is_ok() {
            if let Some(ts) = decoded.timestamp() {
                let secs = ts_to_secs(ts);
                if secs < start {
                    continue;
                }
                if secs > end {
                    break 'packets;
                }
            }
            if decoded.channel_layout().bits() == 0 {
                decoded.set_channel_layout(in_layout);
            }
            let mut resampled = ffmpeg::util::frame::audio::Audio::empty();
            resampler.run(&decoded, &mut resampled)?;
            write_frame(&resampled, &mut writer)?;
        }
    }

    // Drain whatever the resampler buffered internally.
    while resampler.delay().is_some() {
        let mut resampled = ffmpeg::util::frame::audio::Audio::empty();
        resampler.flush(&mut resampled)?;
        if resampled.samples() == 0 {
            break;
        }
        write_frame(&resampled, &mut writer)?;
    }

    let sample_count = writer.len();
    writer.finalize()?;

    if sample_count == 0 {
        return Err(MediaError::SegmentOutOfRange);
    }

    debug!("wrote {} samples to {:?}", sample_count, temp.path());
    Ok(temp)
}

fn write_frame(
    frame: &ffmpeg::util::frame::audio::Audio,
    writer: &mut WavWriter<std::io::BufWriter<std::fs::File>>,
) -> Result<()> {
    if frame.samples() == 0 {
        return Ok(());
    }
    for &sample in frame.plane::<i16>(0) {
        writer.write_sample(sample)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_duration() {
        assert_eq!(clamp_segment(30.0, 45.0, 60.0), Some((30.0, 45.0)));
    }

    #[test]
    fn test_clamp_end_truncated() {
        assert_eq!(clamp_segment(30.0, 45.0, 40.0), Some((30.0, 40.0)));
    }

    #[test]
    fn test_start_beyond_duration() {
        assert_eq!(clamp_segment(30.0, 45.0, 20.0), None);
        assert_eq!(clamp_segment(30.0, 45.0, 30.0), None);
    }

    #[test]
    fn test_unknown_duration_rejected() {
        assert_eq!(clamp_segment(30.0, 45.0, 0.0), None);
    }
}
