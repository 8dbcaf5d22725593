use std::path::PathBuf;

use crate::{error::Result, image::Resolution, pixel_formats::PixelFormat};

pub mod raw_file_muxer;

pub trait Muxer {
    /// Writes `frames` back to back as one raw video file.
    fn write_frames<F: AsRef<[u8]>>(
        &self,
        file_name: &str,
        format: &dyn PixelFormat,
        resolution: Resolution,
        frames: &[F],
    ) -> Result<PathBuf>;

    fn write_bitstream(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf>;
}
