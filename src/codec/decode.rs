use rayon::prelude::*;
use tracing::debug;

use crate::{
    binary::byte_reader::ByteReader,
    error::{CodecError, Result},
    image::Resolution,
    pixel_formats::{PixelFormat, Rgb24Frame, Yuv420p, Yuv420pFrame},
};

use super::{delta::reconstruct_frames, entropy::EntropyCoder};

/// Splits `bytes` into `frame_size` chunks. A short final chunk is an error.
pub fn split_frames(bytes: &[u8], frame_size: usize) -> Result<Vec<Vec<u8>>> {
    if frame_size == 0 {
        return Err(CodecError::InvalidFrameSize(frame_size));
    }

    let mut reader = ByteReader::new(bytes);
    let mut frames = Vec::with_capacity(bytes.len() / frame_size);

    while !reader.is_finished() {
        match reader.read_bytes(frame_size) {
            Some(frame) => frames.push(frame.to_vec()),
            None => {
                return Err(CodecError::TruncatedStream {
                    expected: frame_size,
                    available: reader.number_of_bytes_left(),
                })
            }
        }
    }

    Ok(frames)
}

pub fn decode_video(
    bitstream: &[u8],
    resolution: Resolution,
    coder: &dyn EntropyCoder,
) -> Result<Vec<Yuv420pFrame>> {
    let inflated = coder.decompress(bitstream)?;
    debug!(
        backend = coder.name(),
        inflated = inflated.len(),
        "decompressed bitstream"
    );

    let deltas = split_frames(&inflated, Yuv420p.frame_size(resolution))?;
    let frames = reconstruct_frames(deltas)?;
    debug!(frames = frames.len(), "reconstructed planar frames");

    frames
        .into_iter()
        .map(|bytes| Yuv420pFrame::from_bytes(resolution, bytes))
        .collect()
}

pub fn frames_to_rgb24(frames: &[Yuv420pFrame]) -> Vec<Rgb24Frame> {
    frames.par_iter().map(Yuv420pFrame::to_rgb24).collect()
}
