use rayon::prelude::*;
use tracing::debug;

use crate::{
    error::{CodecError, Result},
    image::Resolution,
    pixel_formats::{Rgb24Frame, Yuv420pFrame},
    report::CompressionReport,
};

use super::{delta::predict_frames, entropy::EntropyCoder, rle::rle_encode};

#[derive(Debug, Clone)]
pub struct EncodedVideo {
    pub resolution: Resolution,
    /// Planar frames before prediction, in sequence order.
    pub frames: Vec<Yuv420pFrame>,
    pub bitstream: Vec<u8>,
    pub report: CompressionReport,
}

pub fn encode_video(
    frames: &[Rgb24Frame],
    resolution: Resolution,
    coder: &dyn EntropyCoder,
) -> Result<EncodedVideo> {
    if let Some(frame) = frames.iter().find(|f| f.resolution() != resolution) {
        return Err(CodecError::FrameSizeMismatch {
            format: "rgb24",
            expected: resolution.rgb24_frame_size(),
            actual: frame.as_bytes().len(),
        });
    }

    let raw_size = frames.iter().map(|f| f.as_bytes().len()).sum();

    // No cross-frame dependency until prediction.
    let planar: Vec<Yuv420pFrame> = frames.par_iter().map(Yuv420pFrame::from_rgb24).collect();
    let yuv_size = planar.iter().map(|f| f.as_bytes().len()).sum();
    debug!(frames = planar.len(), %resolution, "converted frames to yuv420p");

    let deltas = predict_frames(&planar)?;
    let rle_size = deltas.first().map_or(0, Vec::len)
        + deltas
            .par_iter()
            .skip(1)
            .map(|delta| rle_encode(delta).len())
            .sum::<usize>();
    debug!(rle_size, "measured run-length coded size");

    let bitstream = coder.compress_chunks(&deltas)?;
    debug!(
        backend = coder.name(),
        compressed = bitstream.len(),
        "entropy coded delta frames"
    );

    let report = CompressionReport {
        frame_count: planar.len(),
        raw_size,
        yuv_size,
        rle_size,
        entropy_size: bitstream.len(),
        entropy_backend: coder.name(),
    };

    Ok(EncodedVideo {
        resolution,
        frames: planar,
        bitstream,
        report,
    })
}
