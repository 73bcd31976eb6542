//! First frame extraction to PNG

use crate::error::{MediaError, Result};
use crate::ffmpeg_init;
use ffmpeg_next::{self as ffmpeg, codec, format, media, software};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Decode the first video frame and encode it as a PNG temp file.
pub fn extract_first_frame(video_path: &Path) -> Result<NamedTempFile> {
    ffmpeg_init();

    let mut input = ffmpeg::format::input(&video_path)?;
    let stream = input
        .streams()
        .best(media::Type::Video)
        .ok_or(MediaError::NoVideoFrame)?;
    let stream_index = stream.index();

    let mut decoder = codec::context::Context::from_parameters(stream.parameters())?
        .decoder()
        .video()?;

    let mut scaler = software::scaling::context::Context::get(
        decoder.format(),
        decoder.width(),
        decoder.height(),
        format::Pixel::RGB24,
        decoder.width(),
        decoder.height(),
        software::scaling::Flags::BILINEAR,
    )?;

    let mut decoded = ffmpeg::util::frame::video::Video::empty();

    for (packet_stream, packet) in input.packets() {
        if packet_stream.index() != stream_index {
            continue;
        }
        decoder.send_packet(&packet)?;
        if decoder.receive_frame(&mut decoded).is_ok() {
            return encode_png(&mut scaler, &decoded);
        }
    }

    // Drain the decoder in case the first frame needed more packets.
    decoder.send_eof()?;
    if decoder.receive_frame(&mut decoded).is_ok() {
        return encode_png(&mut scaler, &decoded);
    }

    Err(MediaError::NoVideoFrame)
}

fn encode_png(
    scaler: &mut software::scaling::context::Context,
    decoded: &ffmpeg::util::frame::video::Video,
) -> Result<NamedTempFile> {
    let mut rgb = ffmpeg::util::frame::video::Video::empty();
    scaler.run(decoded, &mut rgb)?;

    let width = rgb.width();
    let height = rgb.height();
    let stride = rgb.stride(0);
    let data = rgb.data(0);

    // The scaler output may carry per-row padding; copy row by row.
    let row_len = width as usize * 3;
    let mut pixels = Vec::with_capacity(row_len * height as usize);
    for row in 0..height as usize {
        let start = row * stride;
        pixels.extend_from_slice(&data[start..start + row_len]);
    }

    let img = image::RgbImage::from_raw(width, height, pixels)
        .ok_or(MediaError::NoVideoFrame)?;

    let temp = tempfile::Builder::new()
        .prefix("vidvox")
        .suffix(".png")
        .tempfile()?;
    img.save(temp.path())?;

    debug!("wrote first frame ({}x{}) to {:?}", width, height, temp.path());
    Ok(temp)
}
